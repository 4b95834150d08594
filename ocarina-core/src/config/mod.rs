//! Game rules
//!
//! The game has one fixed rule set. It is kept as a plain table so the
//! round engine never hard-codes a threshold.

pub mod rules;

pub use rules::{Award, GameRules};
