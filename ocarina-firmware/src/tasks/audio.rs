//! Audio task
//!
//! Owns the melody player and plays game audio commands in the
//! background.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Timer};

use ocarina_drivers::audio::MelodyPlayer;

use crate::channels::AUDIO_CMD;
use crate::tasks::speaker::SpeakerHandle;

#[embassy_executor::task]
pub async fn audio_task() {
    info!("Audio task started");

    let start = Instant::now();
    let mut player = MelodyPlayer::new(SpeakerHandle);
    let mut next_change: Option<u32> = None;

    loop {
        let command = match next_change {
            Some(at_ms) => {
                let at = start + Duration::from_millis(at_ms as u64);
                match select(AUDIO_CMD.wait(), Timer::at(at)).await {
                    Either::First(command) => Some(command),
                    Either::Second(_) => None,
                }
            }
            None => Some(AUDIO_CMD.wait().await),
        };

        let now_ms = start.elapsed().as_millis() as u32;
        next_change = match command {
            Some(command) => {
                debug!("Audio: {:?}", command);
                player.handle(command, now_ms)
            }
            None => player.advance(now_ms),
        };
    }
}
