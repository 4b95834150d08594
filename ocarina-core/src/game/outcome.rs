//! Round and game outcomes
//!
//! Awarding a round is pure feedback: the caller performs the transition
//! afterwards. Win and fail are the entry actions of the terminal states.

use crate::assets::{Icon, Melody};
use crate::config::Award;
use crate::state::GameState;
use crate::traits::{Audio, Display, DisplayExt, Platform, Sensors};

use super::context::Game;

/// Prompt shown on both end screens
pub const RESET_PROMPT: &str = "A+B TO RESET";

impl<S, D, A, P> Game<S, D, A, P>
where
    S: Sensors,
    D: Display,
    A: Audio,
    P: Platform,
{
    /// Grant the current round's award
    ///
    /// The melody is chosen by the round being cleared, so this must run
    /// before the transition.
    pub(super) fn award_round(&mut self) {
        let Some(round) = self.state.round_number() else {
            return;
        };
        if let Some(award) = self.rules.award_for(round) {
            self.award(round, award);
        }
    }

    fn award(&mut self, round: u8, award: Award) {
        self.progress.pieces_found += award.pieces;
        self.progress.score += award.points;

        self.display.show_icon(Icon::Piece);
        if let Some(melody) = Melody::for_round(round) {
            self.audio.play_melody(melody);
        }
        self.display
            .show_fmt(format_args!("FOUND {} PIECES!", award.pieces));
    }

    /// Entry action of [`GameState::Win`]
    pub(super) fn game_win(&mut self) {
        self.state = GameState::Win;
        self.display.show_text("YOU FOUND THE OCARINA OF PATH!");
        self.display.show_icon(Icon::Ocarina);
        self.display
            .show_fmt(format_args!("SCORE: {}", self.progress.score));
        self.display.show_text(RESET_PROMPT);
    }

    /// Entry action of [`GameState::Fail`]
    ///
    /// The reset prompt is not shown here; it is scheduled and shown by a
    /// later tick so the controller never sleeps.
    pub(super) fn game_fail(&mut self) {
        // Round 3 may still be ringing
        self.audio.stop_tone();
        self.state = GameState::Fail;

        self.display.show_icon(Icon::No);
        self.display.show_text("TRY AGAIN?");
        self.audio.play_melody(Melody::FAIL);

        let now = self.sensors.elapsed_ms();
        self.reset_prompt_at = Some(now.saturating_add(self.rules.fail_prompt_delay_ms));
    }

    /// Show the reset prompt once its time has come
    ///
    /// Returns true if the prompt was shown on this call.
    pub(super) fn show_reset_prompt_if_due(&mut self) -> bool {
        let Some(due) = self.reset_prompt_at else {
            return false;
        };
        if self.sensors.elapsed_ms() < due {
            return false;
        }

        self.reset_prompt_at = None;
        self.display.show_text(RESET_PROMPT);
        true
    }
}
