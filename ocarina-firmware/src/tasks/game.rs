//! Game task
//!
//! Sole owner of the game. Ticks and inputs are handled one at a time
//! in arrival order.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_futures::select::{select, Either};

use ocarina_drivers::display::DisplayCommand;

use crate::channels::{CALIBRATED, DISPLAY_BUSY, DISPLAY_CHANNEL, INPUT_CHANNEL};
use crate::ports::BoardGame;
use crate::tasks::tick::TICK_SIGNAL;

/// Shown while the compass calibrates
const CALIBRATION_PROMPT: &str = "TURN ME AROUND";

#[embassy_executor::task]
pub async fn game_task(mut game: BoardGame) {
    info!("Game task started");

    let mut prompt = heapless::String::new();
    let _ = prompt.push_str(CALIBRATION_PROMPT);
    let _ = DISPLAY_CHANNEL.try_send(DisplayCommand::Text(prompt));
    CALIBRATED.wait().await;

    game.power_up();
    let mut state = game.state();
    info!("Game ready in {:?}", state);

    loop {
        match select(INPUT_CHANNEL.receive(), TICK_SIGNAL.wait()).await {
            Either::First(input) => {
                debug!("Input: {:?}", input);
                game.handle_input(input);
            }
            Either::Second(now_ms) => {
                // Messages play out before the game moves on
                if DISPLAY_BUSY.load(Ordering::Relaxed) {
                    trace!("Display busy, skipping tick at {}", now_ms);
                    continue;
                }
                game.tick();
            }
        }

        if game.state() != state {
            info!("State: {:?} -> {:?}", state, game.state());
            state = game.state();
        }
    }
}
