//! Platform services

/// Trait for randomness and device control
pub trait Platform {
    /// Uniform random integer in `min..=max`
    fn random_int(&mut self, min: i32, max: i32) -> i32;

    /// Cold restart of the device
    ///
    /// On hardware this does not return. Host fakes record the request.
    fn restart(&mut self);
}
