//! Rules table definitions
//!
//! Every threshold, time limit and award used by the round engine.

/// Pieces and points granted for clearing a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Award {
    /// Ocarina pieces added to the collection
    pub pieces: u32,
    /// Points added to the score
    pub points: u32,
}

impl Award {
    /// Create an award
    pub const fn new(pieces: u32, points: u32) -> Self {
        Self { pieces, points }
    }
}

/// Complete rule set for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameRules {
    /// Controller tick period (ms)
    pub tick_interval_ms: u32,

    // Round 1: navigation
    /// Shakes needed before the heading is checked
    pub step_goal: u32,
    /// Allowed heading error either side of the target (degrees)
    pub heading_tolerance_deg: i32,
    /// Roll window (exclusive, either side of flat) that reveals the step count
    pub level_window_deg: i32,

    // Round 2: tilt hot/cold
    /// Time limit (s)
    pub tilt_time_limit_s: u16,
    /// Roll distance that counts as found (degrees)
    pub tilt_tolerance_deg: i32,
    /// Roll distance mapped to a dark pixel (degrees)
    pub tilt_max_distance_deg: i32,
    /// Brightest hint level
    pub max_brightness: i32,
    /// Scale from hint level to pixel level (0-255)
    pub brightness_scale: i32,

    // Round 3: compass tone
    /// Time limit (s)
    pub tone_time_limit_s: u16,
    /// Circular heading distance that counts as found (degrees)
    pub tone_tolerance_deg: i32,
    /// Tone frequency when facing the target (Hz)
    pub max_frequency_hz: i32,
    /// Tone frequency when facing away from the target (Hz)
    pub min_frequency_hz: i32,

    // Outcomes
    /// Awards for rounds 1, 2 and 3
    pub awards: [Award; 3],
    /// Delay between the fail message and the reset prompt (ms)
    pub fail_prompt_delay_ms: u32,
}

impl GameRules {
    /// The one and only rule set
    pub const STANDARD: Self = Self {
        tick_interval_ms: 500,
        step_goal: 20,
        heading_tolerance_deg: 20,
        level_window_deg: 15,
        tilt_time_limit_s: 60,
        tilt_tolerance_deg: 5,
        tilt_max_distance_deg: 90,
        max_brightness: 9,
        brightness_scale: 25,
        tone_time_limit_s: 90,
        tone_tolerance_deg: 10,
        max_frequency_hz: 1000,
        min_frequency_hz: 100,
        awards: [Award::new(1, 1), Award::new(2, 2), Award::new(3, 3)],
        fail_prompt_delay_ms: 2000,
    };

    /// Award for a round number (1-3)
    pub fn award_for(&self, round: u8) -> Option<Award> {
        match round {
            1..=3 => Some(self.awards[(round - 1) as usize]),
            _ => None,
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::STANDARD
    }
}
