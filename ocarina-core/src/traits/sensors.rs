//! Sensor readings consumed by the rounds

/// Trait for the board's orientation sensors and clock
///
/// Readings are always available; a driver that loses the bus keeps
/// reporting its last good value.
pub trait Sensors {
    /// Compass heading in degrees, 0 = magnetic north, range [0, 360)
    fn compass_heading(&mut self) -> i32;

    /// Roll (tilt about the long axis) in degrees, 0 = flat
    fn roll(&mut self) -> i32;

    /// Milliseconds since power-up, monotonically increasing
    fn elapsed_ms(&mut self) -> u32;
}
