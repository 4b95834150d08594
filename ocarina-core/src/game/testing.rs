//! Fake board used by the game tests

use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use crate::assets::{Icon, Melody};
use crate::traits::{Audio, Display, Platform, Sensors};

use super::Game;

/// Sensors with readings set directly by the test
#[derive(Debug, Default)]
pub struct FakeSensors {
    pub heading: i32,
    pub roll: i32,
    pub elapsed_ms: u32,
}

impl Sensors for FakeSensors {
    fn compass_heading(&mut self) -> i32 {
        self.heading
    }

    fn roll(&mut self) -> i32 {
        self.roll
    }

    fn elapsed_ms(&mut self) -> u32 {
        self.elapsed_ms
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Text(String),
    Clear,
    Icon(Icon),
    Number(i32),
    Pixel(u8, u8, u8),
}

/// Display that records every call
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub calls: Vec<DisplayCall>,
}

impl RecordingDisplay {
    /// Only the text messages, in order
    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DisplayCall::Text(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Most recent call
    pub fn last(&self) -> Option<&DisplayCall> {
        self.calls.last()
    }
}

impl Display for RecordingDisplay {
    fn show_text(&mut self, text: &str) {
        self.calls.push(DisplayCall::Text(text.into()));
    }

    fn clear(&mut self) {
        self.calls.push(DisplayCall::Clear);
    }

    fn show_icon(&mut self, icon: Icon) {
        self.calls.push(DisplayCall::Icon(icon));
    }

    fn show_number(&mut self, value: i32) {
        self.calls.push(DisplayCall::Number(value));
    }

    fn plot_brightness(&mut self, x: u8, y: u8, level: u8) {
        self.calls.push(DisplayCall::Pixel(x, y, level));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    Melody(Melody),
    Tone(u32),
    Stop,
}

/// Speaker that records every call
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
}

impl Audio for RecordingAudio {
    fn play_melody(&mut self, melody: Melody) {
        self.calls.push(AudioCall::Melody(melody));
    }

    fn play_tone(&mut self, frequency_hz: u32) {
        self.calls.push(AudioCall::Tone(frequency_hz));
    }

    fn stop_tone(&mut self) {
        self.calls.push(AudioCall::Stop);
    }
}

/// Platform returning scripted random values
///
/// Each draw takes the next scripted value clamped into the requested
/// range; once the script runs out, draws return `min`.
#[derive(Debug, Default)]
pub struct ScriptedPlatform {
    pub values: VecDeque<i32>,
    pub restarts: u32,
}

impl Platform for ScriptedPlatform {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.values
            .pop_front()
            .map(|value| value.clamp(min, max))
            .unwrap_or(min)
    }

    fn restart(&mut self) {
        self.restarts += 1;
    }
}

pub type FakeGame = Game<FakeSensors, RecordingDisplay, RecordingAudio, ScriptedPlatform>;

/// Game on a fake board with scripted random draws
pub fn new_game(random: &[i32]) -> FakeGame {
    let platform = ScriptedPlatform {
        values: random.iter().copied().collect(),
        restarts: 0,
    };
    Game::new(
        FakeSensors::default(),
        RecordingDisplay::default(),
        RecordingAudio::default(),
        platform,
    )
}
