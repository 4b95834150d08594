//! 5×5 LED display
//!
//! [`Screen`] turns queued game display calls into frames over time;
//! [`LedMatrix`] multiplexes a frame onto the row and column pins.

pub mod font;
pub mod frame;
pub mod matrix;
pub mod scroll;
pub mod screen;

pub use frame::{Frame, FULL_BRIGHTNESS, GRID_SIZE};
pub use matrix::{LedMatrix, MatrixError, SUBFRAMES};
pub use scroll::TextScroller;
pub use screen::{
    DisplayCommand, RepeatFilter, Screen, ICON_HOLD_MS, QUEUE_DEPTH, SCROLL_STEP_MS,
};
