//! Button input

pub mod buttons;

pub use buttons::{ButtonDecoder, ButtonEvent, DEBOUNCE_SAMPLES};
