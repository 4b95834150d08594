//! Hardware driver implementations
//!
//! This crate provides the board side of the game for the micro:bit v2:
//!
//! - LED matrix multiplexing, 5×5 font and the display command sequencer
//! - LSM303AGR accelerometer/magnetometer, orientation math, compass
//!   calibration and shake detection
//! - Button A/B/A+B decoding
//! - Melody and tone playback on a frequency-settable output
//!
//! Everything here is written against `embedded-hal` traits or small
//! local traits, so it runs on the host for tests.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod audio;
pub mod display;
pub mod input;
pub mod sensor;
