//! Game context: state, counters and dispatch

use crate::assets::Icon;
use crate::config::GameRules;
use crate::state::{Event, GameState, Input};
use crate::traits::{Audio, Display, DisplayExt, Platform, Sensors};

use super::timer::Countdown;

/// Pieces and points collected so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Progress {
    /// Ocarina pieces found
    pub pieces_found: u32,
    /// Points scored
    pub score: u32,
}

/// State of the round being played
///
/// Reset by each round's start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundContext {
    /// Target heading (round 1, 3) or roll angle (round 2)
    pub target: i32,
    /// Shakes counted in round 1
    pub steps: u32,
    /// Time left in rounds 2 and 3
    pub countdown: Countdown,
}

/// The game
///
/// Owns the board ports so the whole game can be driven by a fake board
/// in tests.
pub struct Game<S, D, A, P> {
    pub(super) sensors: S,
    pub(super) display: D,
    pub(super) audio: A,
    pub(super) platform: P,
    pub(super) rules: GameRules,
    pub(super) state: GameState,
    pub(super) progress: Progress,
    pub(super) round: RoundContext,
    /// When the fail screen should show the reset prompt (elapsed ms)
    pub(super) reset_prompt_at: Option<u32>,
}

impl<S, D, A, P> Game<S, D, A, P>
where
    S: Sensors,
    D: Display,
    A: Audio,
    P: Platform,
{
    /// Create a game with the standard rules
    pub fn new(sensors: S, display: D, audio: A, platform: P) -> Self {
        Self::with_rules(sensors, display, audio, platform, GameRules::STANDARD)
    }

    /// Create a game with a specific rules table
    pub fn with_rules(sensors: S, display: D, audio: A, platform: P, rules: GameRules) -> Self {
        Self {
            sensors,
            display,
            audio,
            platform,
            rules,
            state: GameState::Instructions,
            progress: Progress::default(),
            round: RoundContext::default(),
            reset_prompt_at: None,
        }
    }

    /// Get current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Get pieces and score
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Get the current round's target, steps and countdown
    pub fn round(&self) -> &RoundContext {
        &self.round
    }

    /// Get the rules table
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Get access to the sensors
    pub fn sensors(&self) -> &S {
        &self.sensors
    }

    /// Get mutable access to the sensors
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    /// Get access to the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get mutable access to the display
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Get access to the speaker
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Get access to the platform services
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Power-up sequence
    ///
    /// Shows the title and instructions and waits in the instructions
    /// state with zeroed counters.
    pub fn power_up(&mut self) {
        self.state = GameState::Instructions;
        self.progress = Progress::default();
        self.round = RoundContext::default();
        self.reset_prompt_at = None;

        self.display.show_text("OCARINA OF PATH");
        self.display.show_icon(Icon::Title);
        self.display.show_text("A+B TO START");
    }

    /// Run one tick of the current state
    pub fn tick(&mut self) {
        match self.state {
            GameState::Instructions | GameState::Win => self.idle(),
            GameState::Round1 => self.play_navigation(),
            GameState::Round2 => self.play_tilt(),
            GameState::Round3 => self.play_tone(),
            GameState::Fail => {
                if !self.show_reset_prompt_if_due() {
                    self.idle();
                }
            }
        }
    }

    /// Process an input from the board
    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input::ButtonA => self.show_status(),
            Input::ButtonAB => match self.state {
                GameState::Instructions => self.advance(Event::Start),
                state if state.is_terminal() => self.platform.restart(),
                _ => {}
            },
            Input::Shake => {
                if self.state == GameState::Round1 {
                    self.round.steps += 1;
                }
            }
            Input::ButtonB => {}
        }
    }

    /// Apply an event and run the entry action of the new state
    pub(super) fn advance(&mut self, event: Event) {
        let next = self.state.transition(event);
        if next == self.state {
            return;
        }

        match next {
            GameState::Instructions => self.state = GameState::Instructions,
            GameState::Round1 => self.start_round1(),
            GameState::Round2 => self.start_round2(),
            GameState::Round3 => self.start_round3(),
            GameState::Win => self.game_win(),
            GameState::Fail => self.game_fail(),
        }
    }

    /// Blank display while waiting for input
    fn idle(&mut self) {
        self.display.clear();
    }

    /// Show pieces then score
    fn show_status(&mut self) {
        let Progress {
            pieces_found,
            score,
        } = self.progress;
        self.display.show_fmt(format_args!("P: {}", pieces_found));
        self.display.show_fmt(format_args!("S: {}", score));
    }
}
