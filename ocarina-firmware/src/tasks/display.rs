//! Display task
//!
//! Feeds queued commands to the screen sequencer and multiplexes the
//! current frame onto the LED matrix, one row per scan period.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_nrf::gpio::Output;
use embassy_time::{Duration, Instant, Ticker};

use ocarina_drivers::display::{LedMatrix, Screen, QUEUE_DEPTH};

use crate::channels::{DISPLAY_BUSY, DISPLAY_CHANNEL};

pub type BoardMatrix = LedMatrix<Output<'static>, Output<'static>>;

#[embassy_executor::task]
pub async fn display_task(mut matrix: BoardMatrix, row_scan_us: u64) {
    info!("Display task started");

    let start = Instant::now();
    let mut screen = Screen::new();
    let mut ticker = Ticker::every(Duration::from_micros(row_scan_us));

    loop {
        ticker.next().await;

        while screen.pending() < QUEUE_DEPTH {
            let Ok(command) = DISPLAY_CHANNEL.try_receive() else {
                break;
            };
            trace!("Display: {:?}", command);
            // Room was checked above
            let _ = screen.push(command);
        }

        let now_ms = start.elapsed().as_millis() as u32;
        screen.advance(now_ms);
        DISPLAY_BUSY.store(
            screen.is_busy() || !DISPLAY_CHANNEL.is_empty(),
            Ordering::Relaxed,
        );

        if let Err(e) = matrix.scan(screen.frame()) {
            warn!("LED matrix scan failed: {:?}", e);
        }
    }
}
