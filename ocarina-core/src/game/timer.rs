//! Round countdown
//!
//! The countdown is stepped once per tick. With a 500 ms tick it would
//! run twice as fast as the wall clock, so a step only decrements when the
//! elapsed time is in the first half of a second.

/// Result of stepping the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownStatus {
    /// Time was left at the start of this step
    Running,
    /// Time had already run out
    Expired,
}

/// Per-round countdown in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Countdown {
    remaining_s: u16,
}

impl Countdown {
    /// Create a countdown with `seconds` left
    pub const fn new(seconds: u16) -> Self {
        Self {
            remaining_s: seconds,
        }
    }

    /// Seconds left
    pub fn remaining(&self) -> u16 {
        self.remaining_s
    }

    /// Check if no time is left
    pub fn is_expired(&self) -> bool {
        self.remaining_s == 0
    }

    /// Step the countdown for a tick taken at `elapsed_ms`
    ///
    /// Expiry is reported on the step after the last second is used up,
    /// so the round still gets one full tick at zero.
    pub fn step(&mut self, elapsed_ms: u32) -> CountdownStatus {
        if self.remaining_s == 0 {
            return CountdownStatus::Expired;
        }

        if elapsed_ms % 1000 < 500 {
            self.remaining_s -= 1;
        }
        CountdownStatus::Running
    }
}
