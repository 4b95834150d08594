//! Round engine
//!
//! Each round has a start (entry action) and a play step run once per
//! tick. A play step reads the sensors, renders proportional feedback and
//! either keeps going, clears the round, or times out.

use crate::assets::Icon;
use crate::config::GameRules;
use crate::feedback::{
    brightness_for_distance, circular_distance, pixel_level, raw_distance, tone_for_distance,
    Cardinal,
};
use crate::state::{Event, GameState};
use crate::traits::{Audio, Display, DisplayExt, Platform, Sensors};

use super::context::{Game, RoundContext};
use super::timer::{Countdown, CountdownStatus};

/// Headings round 1 can ask for (N, E, S, W)
pub const CARDINAL_TARGETS: [i32; 4] = [0, 90, 180, 270];

/// Where the player stands after walking in round 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arrival {
    /// Not enough steps yet
    Walking,
    /// Enough steps, facing the target
    Arrived,
    /// Enough steps, facing the wrong way
    WrongWay,
}

/// Check round 1 progress
///
/// `heading_diff` is the raw (unwrapped) difference between heading and
/// target. Differences of 340° or more count as facing the target, which
/// covers the 0°/360° wrap.
pub fn check_arrival(steps: u32, heading_diff: i32, rules: &GameRules) -> Arrival {
    if steps < rules.step_goal {
        return Arrival::Walking;
    }

    let tolerance = rules.heading_tolerance_deg;
    if heading_diff <= tolerance || heading_diff >= 360 - tolerance {
        Arrival::Arrived
    } else {
        Arrival::WrongWay
    }
}

impl<S, D, A, P> Game<S, D, A, P>
where
    S: Sensors,
    D: Display,
    A: Audio,
    P: Platform,
{
    /// Round 1: walk 20 steps towards a cardinal direction
    pub(super) fn start_round1(&mut self) {
        self.state = GameState::Round1;
        self.round = RoundContext::default();
        self.display.show_text("R1: 1 PIECE");

        let last = CARDINAL_TARGETS.len() as i32 - 1;
        let index = self.platform.random_int(0, last).clamp(0, last);
        self.round.target = CARDINAL_TARGETS[index as usize];

        let direction = Cardinal::from_heading(self.round.target);
        self.display
            .show_fmt(format_args!("GO: {}", direction.as_str()));
    }

    /// Round 2: find the hidden tilt angle by pixel brightness
    pub(super) fn start_round2(&mut self) {
        self.state = GameState::Round2;
        let limit = self.rules.tilt_time_limit_s;
        self.round = RoundContext {
            countdown: Countdown::new(limit),
            ..RoundContext::default()
        };

        self.display.show_text("R2: 2 PIECES");
        self.display.show_fmt(format_args!("HUNT: {}s", limit));
        self.round.target = self.platform.random_int(-90, 90);
    }

    /// Round 3: find the hidden heading by tone pitch
    pub(super) fn start_round3(&mut self) {
        self.state = GameState::Round3;
        let limit = self.rules.tone_time_limit_s;
        self.round = RoundContext {
            countdown: Countdown::new(limit),
            ..RoundContext::default()
        };

        self.display.show_text("R3: 3 PIECES");
        self.display.show_fmt(format_args!("HUNT: {}s", limit));
        self.round.target = self.platform.random_int(0, 359);
    }

    pub(super) fn play_navigation(&mut self) {
        // Step count is only revealed while the board is held level
        let roll = self.sensors.roll();
        let window = self.rules.level_window_deg;
        if roll > -window && roll < window {
            self.display.show_number(self.round.steps as i32);
        } else {
            self.display.clear();
        }

        let heading_diff = raw_distance(self.sensors.compass_heading(), self.round.target);
        match check_arrival(self.round.steps, heading_diff, &self.rules) {
            Arrival::Walking => {}
            Arrival::Arrived => {
                self.award_round();
                self.advance(Event::RoundCleared);
            }
            Arrival::WrongWay => {
                // Same target again
                let direction = Cardinal::from_heading(self.round.target);
                self.display
                    .show_fmt(format_args!("Wrong Way! Find {}", direction.as_str()));
                self.round.steps = 0;
            }
        }
    }

    pub(super) fn play_tilt(&mut self) {
        if self.step_countdown() == CountdownStatus::Expired {
            return;
        }

        let distance = raw_distance(self.sensors.roll(), self.round.target);
        let brightness = brightness_for_distance(distance, &self.rules);
        self.display
            .plot_brightness(2, 2, pixel_level(brightness, &self.rules));

        if distance <= self.rules.tilt_tolerance_deg {
            self.award_round();
            self.advance(Event::RoundCleared);
        }
    }

    pub(super) fn play_tone(&mut self) {
        if self.step_countdown() == CountdownStatus::Expired {
            return;
        }

        let distance = circular_distance(self.sensors.compass_heading(), self.round.target);
        let frequency = tone_for_distance(distance, &self.rules);
        self.audio.play_tone(frequency.max(0) as u32);
        self.display.show_icon(Icon::Target);

        if distance <= self.rules.tone_tolerance_deg {
            self.audio.stop_tone();
            self.award_round();
            self.advance(Event::RoundCleared);
        }
    }

    /// Step the countdown, failing the round once it has run out
    fn step_countdown(&mut self) -> CountdownStatus {
        let elapsed_ms = self.sensors.elapsed_ms();
        let status = self.round.countdown.step(elapsed_ms);
        if status == CountdownStatus::Expired {
            self.advance(Event::TimeUp);
        }
        status
    }
}
