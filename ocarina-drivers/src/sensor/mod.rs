//! Motion sensing
//!
//! LSM303AGR access plus the pure processing on top of it: roll,
//! tilt-compensated heading, compass calibration and shake detection.

pub mod calibration;
pub mod lsm303;
pub mod orientation;
pub mod shake;

use core::ops::Sub;

pub use calibration::CompassCalibration;
pub use lsm303::{MotionSensor, SensorError};
pub use orientation::{heading_degrees, roll_degrees};
pub use shake::{ShakeConfig, ShakeDetector};

/// Three-axis reading in the board frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector3 {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub(crate) fn to_f32(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
