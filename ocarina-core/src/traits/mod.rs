//! Board abstraction traits
//!
//! These traits define the interface between the game logic and the
//! board. All calls are fire-and-forget: the game never waits for a
//! display or audio operation to finish.

pub mod audio;
pub mod display;
pub mod platform;
pub mod sensors;

pub use audio::Audio;
pub use display::{Display, DisplayExt, MAX_MESSAGE_LEN};
pub use platform::Platform;
pub use sensors::Sensors;
