//! Hard-iron compass calibration
//!
//! The board is turned through every orientation while the field is
//! sampled. The centre of the observed range on each axis is the offset
//! caused by magnets and metal on the board itself.

use super::Vector3;

/// Field span on every axis before the calibration counts as usable (mG)
pub const MIN_SPAN_MG: i32 = 300;

/// Running min/max of the magnetic field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompassCalibration {
    min: Vector3,
    max: Vector3,
    samples: u32,
}

impl CompassCalibration {
    pub const fn new() -> Self {
        Self {
            min: Vector3::new(0, 0, 0),
            max: Vector3::new(0, 0, 0),
            samples: 0,
        }
    }

    /// Add one magnetometer reading
    pub fn observe(&mut self, field: Vector3) {
        if self.samples == 0 {
            self.min = field;
            self.max = field;
        } else {
            self.min = Vector3::new(
                self.min.x.min(field.x),
                self.min.y.min(field.y),
                self.min.z.min(field.z),
            );
            self.max = Vector3::new(
                self.max.x.max(field.x),
                self.max.y.max(field.y),
                self.max.z.max(field.z),
            );
        }
        self.samples = self.samples.saturating_add(1);
    }

    /// Range seen on each axis
    pub fn span(&self) -> Vector3 {
        Vector3::new(
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }

    /// Check if every axis has been swept far enough
    pub fn is_complete(&self) -> bool {
        let span = self.span();
        span.x >= MIN_SPAN_MG && span.y >= MIN_SPAN_MG && span.z >= MIN_SPAN_MG
    }

    /// Hard-iron offset (zero until the first sample)
    pub fn offset(&self) -> Vector3 {
        Vector3::new(
            (self.min.x + self.max.x) / 2,
            (self.min.y + self.max.y) / 2,
            (self.min.z + self.max.z) / 2,
        )
    }

    /// Remove the offset from a reading
    pub fn apply(&self, field: Vector3) -> Vector3 {
        field - self.offset()
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncalibrated_passthrough() {
        let cal = CompassCalibration::new();
        assert_eq!(cal.apply(Vector3::new(10, -20, 30)), Vector3::new(10, -20, 30));
        assert!(!cal.is_complete());
    }

    #[test]
    fn test_offset_is_range_centre() {
        let mut cal = CompassCalibration::new();
        // Earth field of 250 mG around a board bias of (100, -50, 20)
        for field in [
            Vector3::new(350, -50, 20),
            Vector3::new(-150, -50, 20),
            Vector3::new(100, 200, 20),
            Vector3::new(100, -300, 20),
            Vector3::new(100, -50, 270),
            Vector3::new(100, -50, -230),
        ] {
            cal.observe(field);
        }

        assert_eq!(cal.offset(), Vector3::new(100, -50, 20));
        assert_eq!(cal.span(), Vector3::new(500, 500, 500));
        assert!(cal.is_complete());
        assert_eq!(cal.apply(Vector3::new(350, -50, 20)), Vector3::new(250, 0, 0));
        assert_eq!(cal.samples(), 6);
    }

    #[test]
    fn test_incomplete_until_all_axes_swept() {
        let mut cal = CompassCalibration::new();
        cal.observe(Vector3::new(-300, -300, 0));
        cal.observe(Vector3::new(300, 300, 100));
        assert!(!cal.is_complete());
        cal.observe(Vector3::new(0, 0, -300));
        assert!(cal.is_complete());
    }
}
