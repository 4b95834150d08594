//! Speaker output

pub mod player;
pub mod tone;

pub use player::{AudioCommand, MelodyPlayer};
pub use tone::ToneOutput;
