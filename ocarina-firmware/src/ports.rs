//! Game ports backed by tasks
//!
//! The game owns these adapters. None of them touch hardware: each one
//! forwards to the task that does, or reads what that task published.

use defmt::*;
use embassy_time::Instant;
use heapless::String;
use rand::rngs::SmallRng;
use rand::Rng;

use ocarina_core::assets::{Icon, Melody};
use ocarina_core::traits::{Audio, Display, Platform, Sensors, MAX_MESSAGE_LEN};
use ocarina_core::Game;
use ocarina_drivers::audio::AudioCommand;
use ocarina_drivers::display::{DisplayCommand, RepeatFilter};

use crate::channels::{AUDIO_CMD, DISPLAY_CHANNEL, ORIENTATION};

/// The game as wired on the board
pub type BoardGame = Game<SharedSensors, ChannelDisplay, ChannelAudio, BoardPlatform>;

/// Orientation from the motion task, time since boot
pub struct SharedSensors {
    start: Instant,
}

impl SharedSensors {
    pub fn new(start: Instant) -> Self {
        Self { start }
    }
}

impl Sensors for SharedSensors {
    fn compass_heading(&mut self) -> i32 {
        ORIENTATION.lock(|o| o.get().heading)
    }

    fn roll(&mut self) -> i32 {
        ORIENTATION.lock(|o| o.get().roll)
    }

    fn elapsed_ms(&mut self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}

/// Display commands into the display task's queue
///
/// Commands that would leave the screen unchanged are not queued.
#[derive(Default)]
pub struct ChannelDisplay {
    filter: RepeatFilter,
}

impl ChannelDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn send(&mut self, command: DisplayCommand) {
        if self.filter.is_redundant(&command) {
            return;
        }

        match DISPLAY_CHANNEL.try_send(command.clone()) {
            Ok(()) => self.filter.sent(command),
            Err(_) => warn!("Display queue full, dropping {:?}", command),
        }
    }
}

impl Display for ChannelDisplay {
    fn show_text(&mut self, text: &str) {
        let mut message: String<MAX_MESSAGE_LEN> = String::new();
        for ch in text.chars() {
            if message.push(ch).is_err() {
                warn!("Message truncated: {}", text);
                break;
            }
        }
        self.send(DisplayCommand::Text(message));
    }

    fn clear(&mut self) {
        self.send(DisplayCommand::Clear);
    }

    fn show_icon(&mut self, icon: Icon) {
        self.send(DisplayCommand::Icon(icon));
    }

    fn show_number(&mut self, value: i32) {
        self.send(DisplayCommand::Number(value));
    }

    fn plot_brightness(&mut self, x: u8, y: u8, level: u8) {
        self.send(DisplayCommand::Pixel { x, y, level });
    }
}

/// Audio commands to the audio task
#[derive(Default)]
pub struct ChannelAudio;

impl Audio for ChannelAudio {
    fn play_melody(&mut self, melody: Melody) {
        AUDIO_CMD.signal(AudioCommand::Melody(melody));
    }

    fn play_tone(&mut self, frequency_hz: u32) {
        AUDIO_CMD.signal(AudioCommand::Tone(frequency_hz));
    }

    fn stop_tone(&mut self) {
        AUDIO_CMD.signal(AudioCommand::Stop);
    }
}

/// Randomness and reset for the nRF52833
pub struct BoardPlatform {
    rng: SmallRng,
}

impl BoardPlatform {
    /// `rng` should be seeded from the hardware RNG
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl Platform for BoardPlatform {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn restart(&mut self) {
        info!("Restarting");
        cortex_m::peripheral::SCB::sys_reset();
    }
}
