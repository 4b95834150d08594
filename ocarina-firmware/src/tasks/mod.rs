//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod audio;
pub mod buttons;
pub mod display;
pub mod game;
pub mod motion;
pub mod speaker;
pub mod tick;

pub use audio::audio_task;
pub use buttons::button_task;
pub use display::display_task;
pub use game::game_task;
pub use motion::motion_task;
pub use speaker::speaker_task;
pub use tick::tick_task;
