//! Button polling task

use defmt::*;
use embassy_nrf::gpio::Input;
use embassy_time::{Duration, Ticker};

use ocarina_drivers::input::ButtonDecoder;

use crate::channels::INPUT_CHANNEL;

/// Sample A and B (active low) and forward decoded presses
#[embassy_executor::task]
pub async fn button_task(button_a: Input<'static>, button_b: Input<'static>, poll_ms: u64) {
    info!("Button task started");

    let mut decoder = ButtonDecoder::new();
    let mut ticker = Ticker::every(Duration::from_millis(poll_ms));

    loop {
        ticker.next().await;

        if let Some(event) = decoder.update(button_a.is_low(), button_b.is_low()) {
            debug!("Button: {:?}", event);
            if INPUT_CHANNEL.try_send(event.into()).is_err() {
                warn!("Input queue full, dropping {:?}", event);
            }
        }
    }
}
