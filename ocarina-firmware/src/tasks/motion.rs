//! Motion sensing task
//!
//! Samples the LSM303AGR, publishes orientation for the game and
//! reports shakes as inputs. Starts with a compass calibration window
//! while the player turns the board around.

use defmt::*;
use embassy_nrf::twim::Twim;
use embassy_time::{Delay, Duration, Instant, Ticker, Timer};

use ocarina_core::Input;
use ocarina_drivers::sensor::{
    heading_degrees, roll_degrees, CompassCalibration, MotionSensor, SensorError, ShakeDetector,
};

use crate::channels::{Orientation, CALIBRATED, INPUT_CHANNEL, ORIENTATION};
use crate::config::BoardConfig;

type Sensor = MotionSensor<Twim<'static>>;

/// Delay between attempts to bring up the sensor
const INIT_RETRY_MS: u64 = 1000;

#[embassy_executor::task]
pub async fn motion_task(i2c: Twim<'static>, config: BoardConfig) {
    info!("Motion task started");

    let mut bus = i2c;
    let mut sensor = loop {
        match MotionSensor::start(bus, &mut Delay) {
            Ok(sensor) => break sensor,
            Err((e, returned)) => {
                warn!("LSM303AGR init failed: {:?}", e);
                bus = returned;
                Timer::after_millis(INIT_RETRY_MS).await;
            }
        }
    };
    info!("LSM303AGR ready");

    let mut ticker = Ticker::every(Duration::from_millis(config.motion_poll_ms));

    let calibration = calibrate(&mut sensor, &mut ticker, config.calibration_ms).await;
    info!(
        "Compass offset {:?} from {} samples",
        calibration.offset(),
        calibration.samples()
    );
    CALIBRATED.signal(());

    let mut shake = ShakeDetector::new(config.shake);

    loop {
        ticker.next().await;

        match sample(&mut sensor, &calibration, &mut shake) {
            Ok(orientation) => ORIENTATION.lock(|o| o.set(orientation)),
            // Keep the last good orientation
            Err(e) => warn!("Motion read failed: {:?}", e),
        }
    }
}

/// Collect magnetometer extremes until every axis is swept or time runs out
async fn calibrate(sensor: &mut Sensor, ticker: &mut Ticker, window_ms: u64) -> CompassCalibration {
    let mut calibration = CompassCalibration::new();
    let deadline = Instant::now() + Duration::from_millis(window_ms);

    while Instant::now() < deadline && !calibration.is_complete() {
        ticker.next().await;
        match sensor.magnetic_field() {
            Ok(field) => calibration.observe(field),
            Err(e) => warn!("Calibration read failed: {:?}", e),
        }
    }

    if !calibration.is_complete() {
        warn!("Compass calibration incomplete, span {:?}", calibration.span());
    }
    calibration
}

fn sample(
    sensor: &mut Sensor,
    calibration: &CompassCalibration,
    shake: &mut ShakeDetector,
) -> Result<Orientation, SensorError> {
    let accel = sensor.acceleration()?;

    if shake.update(accel) {
        debug!("Shake");
        if INPUT_CHANNEL.try_send(Input::Shake).is_err() {
            warn!("Input queue full, dropping shake");
        }
    }

    let field = calibration.apply(sensor.magnetic_field()?);
    let previous = ORIENTATION.lock(|o| o.get());

    Ok(Orientation {
        // Free fall or a dead field keeps the old heading
        heading: heading_degrees(accel, field).unwrap_or(previous.heading),
        roll: roll_degrees(accel),
    })
}
