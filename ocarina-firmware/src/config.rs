//! Board timing configuration
//!
//! Game pacing lives in `ocarina_core::config::GameRules`; this covers
//! how often the firmware polls and refreshes its hardware.

use ocarina_drivers::sensor::ShakeConfig;

/// Polling and refresh rates for the micro:bit v2
#[derive(Debug, Clone, Copy)]
pub struct BoardConfig {
    /// Button sampling period (ms)
    pub button_poll_ms: u64,
    /// Accelerometer/magnetometer sampling period (ms)
    pub motion_poll_ms: u64,
    /// Compass calibration window at boot (ms)
    pub calibration_ms: u64,
    /// Time each LED row stays lit (µs)
    pub row_scan_us: u64,
    /// Shake detection tuning
    pub shake: ShakeConfig,
}

impl BoardConfig {
    pub const MICROBIT_V2: Self = Self {
        button_poll_ms: 10,
        motion_poll_ms: 50,
        calibration_ms: 15_000,
        row_scan_us: 250,
        shake: ShakeConfig::DEFAULT,
    };
}
