//! Speaker square-wave task
//!
//! Toggles the speaker pin at twice the requested frequency. A new
//! frequency takes effect at once; 0 parks the pin low.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::Output;
use embassy_time::{Duration, Timer};

use ocarina_drivers::audio::tone::{half_period_ticks, ToneOutput};

use crate::channels::SPEAKER_FREQ;

/// Microsecond timer used for the half period
const MICROS_PER_SECOND: u32 = 1_000_000;

/// [`ToneOutput`] that forwards to [`speaker_task`]
pub struct SpeakerHandle;

impl ToneOutput for SpeakerHandle {
    fn set_frequency(&mut self, frequency_hz: u32) {
        SPEAKER_FREQ.signal(frequency_hz);
    }

    fn silence(&mut self) {
        SPEAKER_FREQ.signal(0);
    }
}

fn half_period(frequency_hz: u32) -> Option<Duration> {
    half_period_ticks(MICROS_PER_SECOND, frequency_hz).map(|us| Duration::from_micros(us as u64))
}

#[embassy_executor::task]
pub async fn speaker_task(mut pin: Output<'static>) {
    info!("Speaker task started");

    let mut period: Option<Duration> = None;

    loop {
        let Some(half) = period else {
            pin.set_low();
            period = half_period(SPEAKER_FREQ.wait().await);
            continue;
        };

        match select(Timer::after(half), SPEAKER_FREQ.wait()).await {
            Either::First(_) => pin.toggle(),
            Either::Second(frequency_hz) => {
                trace!("Speaker {} Hz", frequency_hz);
                period = half_period(frequency_hz);
            }
        }
    }
}
