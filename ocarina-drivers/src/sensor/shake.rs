//! Shake gesture detection
//!
//! A shake is a burst of direction reversals: on any axis the reading
//! swings from beyond +threshold to beyond -threshold (or back) several
//! times in quick succession.

use super::Vector3;

/// Shake detector tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShakeConfig {
    /// Swing past this many mg either side of rest counts as a reversal
    pub threshold_mg: i32,
    /// Reversals needed for one shake
    pub reversals: u8,
    /// Samples without a reversal before the count resets
    pub window_samples: u8,
    /// Samples ignored after a shake is reported
    pub cooldown_samples: u8,
}

impl ShakeConfig {
    pub const DEFAULT: Self = Self {
        threshold_mg: 400,
        reversals: 4,
        window_samples: 10,
        cooldown_samples: 6,
    };
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which side of rest an axis last swung to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Swing {
    None,
    Positive,
    Negative,
}

impl Swing {
    fn of(value: i32, threshold: i32) -> Self {
        if value > threshold {
            Swing::Positive
        } else if value < -threshold {
            Swing::Negative
        } else {
            Swing::None
        }
    }
}

/// Shake gesture detector
///
/// Feed it accelerometer samples at a steady rate. Gravity is removed
/// by subtracting the previous sample, so slow tilting never counts.
#[derive(Debug)]
pub struct ShakeDetector {
    config: ShakeConfig,
    previous: Option<Vector3>,
    swings: [Swing; 3],
    reversals: u8,
    quiet: u8,
    cooldown: u8,
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(ShakeConfig::DEFAULT)
    }
}

impl ShakeDetector {
    pub fn new(config: ShakeConfig) -> Self {
        Self {
            config,
            previous: None,
            swings: [Swing::None; 3],
            reversals: 0,
            quiet: 0,
            cooldown: 0,
        }
    }

    /// Add one sample; returns true when a shake completes
    pub fn update(&mut self, accel: Vector3) -> bool {
        let Some(previous) = self.previous.replace(accel) else {
            return false;
        };

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return false;
        }

        let delta = accel - previous;
        let mut reversed = false;
        for (axis, value) in [delta.x, delta.y, delta.z].into_iter().enumerate() {
            let swing = Swing::of(value, self.config.threshold_mg);
            if swing == Swing::None {
                continue;
            }
            if self.swings[axis] != Swing::None && self.swings[axis] != swing {
                reversed = true;
            }
            self.swings[axis] = swing;
        }

        if reversed {
            self.reversals += 1;
            self.quiet = 0;
        } else {
            self.quiet = self.quiet.saturating_add(1);
            if self.quiet >= self.config.window_samples {
                self.reset();
            }
        }

        if self.reversals >= self.config.reversals {
            self.reset();
            self.cooldown = self.config.cooldown_samples;
            return true;
        }
        false
    }

    fn reset(&mut self) {
        self.swings = [Swing::None; 3];
        self.reversals = 0;
        self.quiet = 0;
    }
}
