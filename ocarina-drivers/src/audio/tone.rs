//! Square-wave tone output

/// Trait for a speaker that can hold a steady tone
pub trait ToneOutput {
    /// Start (or retune) a square wave at `frequency_hz`
    fn set_frequency(&mut self, frequency_hz: u32);

    /// Stop any sound
    fn silence(&mut self);
}

/// Timer ticks per half period for a square wave
///
/// Returns `None` for 0 Hz or frequencies the counter cannot reach.
pub fn half_period_ticks(timer_hz: u32, frequency_hz: u32) -> Option<u16> {
    if frequency_hz == 0 {
        return None;
    }
    let ticks = timer_hz / (frequency_hz * 2);
    u16::try_from(ticks).ok().filter(|t| *t > 0)
}
