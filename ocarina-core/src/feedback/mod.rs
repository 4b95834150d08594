//! Sensor-to-feedback math
//!
//! Pure functions shared by the rounds: compass geometry and the linear
//! maps that turn a distance into brightness or pitch.

pub mod heading;
pub mod mapping;

pub use heading::{circular_distance, raw_distance, Cardinal};
pub use mapping::{brightness_for_distance, map_range, pixel_level, tone_for_distance};
