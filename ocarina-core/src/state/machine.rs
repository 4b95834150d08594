//! State machine definition
//!
//! What the tick does, and which inputs are honored, is a function of the
//! current state. Transitions are a flat table; entry actions live in the
//! game context.

use super::events::Event;

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Title and instructions, waiting for A+B
    #[default]
    Instructions,
    /// Walk 20 steps in the announced direction
    Round1,
    /// Tilt the board to the hidden roll angle
    Round2,
    /// Sweep the compass until the tone peaks
    Round3,
    /// All pieces found
    Win,
    /// A round timed out
    Fail,
}

impl GameState {
    /// Round number (1-3) if this state is a round
    pub fn round_number(&self) -> Option<u8> {
        match self {
            GameState::Round1 => Some(1),
            GameState::Round2 => Some(2),
            GameState::Round3 => Some(3),
            _ => None,
        }
    }

    /// Check if this is an end state that only a restart leaves
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Win | GameState::Fail)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use GameState::*;

        match (self, event) {
            (Instructions, Start) => Round1,

            (Round1, RoundCleared) => Round2,
            (Round2, RoundCleared) => Round3,
            (Round3, RoundCleared) => Win,

            // Round 1 has no countdown
            (Round2, TimeUp) => Fail,
            (Round3, TimeUp) => Fail,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_enters_round1() {
        assert_eq!(
            GameState::Instructions.transition(Event::Start),
            GameState::Round1
        );
    }

    #[test]
    fn test_round_sequence() {
        let mut state = GameState::Round1;
        state = state.transition(Event::RoundCleared);
        assert_eq!(state, GameState::Round2);
        state = state.transition(Event::RoundCleared);
        assert_eq!(state, GameState::Round3);
        state = state.transition(Event::RoundCleared);
        assert_eq!(state, GameState::Win);
    }

    #[test]
    fn test_time_up_fails_timed_rounds() {
        assert_eq!(GameState::Round2.transition(Event::TimeUp), GameState::Fail);
        assert_eq!(GameState::Round3.transition(Event::TimeUp), GameState::Fail);
        assert_eq!(
            GameState::Round1.transition(Event::TimeUp),
            GameState::Round1
        );
    }

    #[test]
    fn test_terminal_states_absorb_events() {
        for state in [GameState::Win, GameState::Fail] {
            for event in [Event::Start, Event::RoundCleared, Event::TimeUp] {
                assert_eq!(state.transition(event), state);
            }
        }
    }

    #[test]
    fn test_start_ignored_mid_game() {
        let states = [GameState::Round1, GameState::Round2, GameState::Round3];

        for state in states {
            assert_eq!(state.transition(Event::Start), state);
        }
    }

    #[test]
    fn test_round_numbers() {
        assert_eq!(GameState::Round1.round_number(), Some(1));
        assert_eq!(GameState::Round2.round_number(), Some(2));
        assert_eq!(GameState::Win.round_number(), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(GameState::Win.is_terminal());
        assert!(GameState::Fail.is_terminal());
        assert!(!GameState::Instructions.is_terminal());
    }
}
