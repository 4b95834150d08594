//! Game state machine
//!
//! Defines the phases of a game and how they advance.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::{Event, Input};
pub use machine::GameState;
