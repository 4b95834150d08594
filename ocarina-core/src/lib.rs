//! Board-agnostic core logic for the Ocarina of Path treasure hunt
//!
//! This crate contains all game logic that does not depend on the board:
//!
//! - Port traits for sensors, display, audio and platform services
//! - Game state machine (instructions, three rounds, win, fail)
//! - Round engine with per-round feedback mapping
//! - Countdown timer paced by elapsed time
//! - Icons and melodies
//! - The fixed rules table

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod assets;
pub mod config;
pub mod feedback;
pub mod game;
pub mod state;
pub mod traits;

pub use game::Game;
pub use state::{Event, GameState, Input};
