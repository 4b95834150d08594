//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use core::cell::Cell;
use core::sync::atomic::AtomicBool;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use ocarina_core::Input;
use ocarina_drivers::audio::AudioCommand;
use ocarina_drivers::display::{DisplayCommand, QUEUE_DEPTH};

/// Channel capacity for button and shake inputs
const INPUT_CHANNEL_SIZE: usize = 8;

/// Latest board orientation in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, defmt::Format)]
pub struct Orientation {
    /// Compass heading, 0..360
    pub heading: i32,
    /// Roll, -180..=180
    pub roll: i32,
}

/// Buttons and shakes for the game task
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, Input, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Display commands from the game to the display task
pub static DISPLAY_CHANNEL: Channel<CriticalSectionRawMutex, DisplayCommand, QUEUE_DEPTH> =
    Channel::new();

/// True while text is scrolling or commands are waiting
pub static DISPLAY_BUSY: AtomicBool = AtomicBool::new(false);

/// Audio command (latest wins)
pub static AUDIO_CMD: Signal<CriticalSectionRawMutex, AudioCommand> = Signal::new();

/// Speaker frequency in Hz, 0 for silence
pub static SPEAKER_FREQ: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Orientation published by the motion task
pub static ORIENTATION: Mutex<CriticalSectionRawMutex, Cell<Orientation>> =
    Mutex::new(Cell::new(Orientation { heading: 0, roll: 0 }));

/// Signal that the compass calibration window is over
pub static CALIBRATED: Signal<CriticalSectionRawMutex, ()> = Signal::new();
