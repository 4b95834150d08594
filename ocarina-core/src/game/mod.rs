//! Game context and round engine
//!
//! A single [`Game`] value owns every piece of game state together with
//! the board ports. The board calls [`Game::tick`] once per tick period and
//! [`Game::handle_input`] for every button press or shake, always from
//! the same task.

mod context;
mod outcome;
mod rounds;
pub mod timer;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{Game, Progress, RoundContext};
pub use rounds::{check_arrival, Arrival, CARDINAL_TARGETS};
pub use timer::{Countdown, CountdownStatus};
