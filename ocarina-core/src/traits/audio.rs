//! Speaker output

use crate::assets::Melody;

/// Trait for the speaker
///
/// A new request replaces whatever is playing.
pub trait Audio {
    /// Play a melody once in the background
    fn play_melody(&mut self, melody: Melody);

    /// Ring a continuous tone until stopped or replaced
    fn play_tone(&mut self, frequency_hz: u32);

    /// Silence the speaker
    fn stop_tone(&mut self);
}
