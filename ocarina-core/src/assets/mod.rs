//! Built-in icons and melodies

pub mod icons;
pub mod melody;

pub use icons::Icon;
pub use melody::{Melody, Note, Notes};
