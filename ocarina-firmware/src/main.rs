//! Ocarina of Path - micro:bit treasure hunt firmware
//!
//! Main firmware binary for the BBC micro:bit v2 (nRF52833). The game
//! itself lives in `ocarina-core`; this binary wires it to the LED
//! matrix, buttons, motion sensor and speaker through Embassy tasks.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::rng::{self, Rng};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::Instant;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use ocarina_core::config::GameRules;
use ocarina_core::Game;
use ocarina_drivers::display::LedMatrix;

use crate::config::BoardConfig;
use crate::ports::{BoardPlatform, ChannelAudio, ChannelDisplay, SharedSensors};

mod channels;
mod config;
mod ports;
mod tasks;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    RNG => rng::InterruptHandler<peripherals::RNG>;
});

// TWIM transmit buffer (must live forever)
static TWIM_TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Ocarina of Path starting...");

    let p = embassy_nrf::init(Default::default());
    let board = BoardConfig::MICROBIT_V2;
    let rules = GameRules::STANDARD;
    let start = Instant::now();
    info!("Peripherals initialized");

    // Seed target draws from the hardware RNG
    let mut seed = [0u8; 16];
    let mut hw_rng = Rng::new(p.RNG, Irqs);
    hw_rng.blocking_fill_bytes(&mut seed);
    let rng = SmallRng::from_seed(seed);

    // LED matrix: rows drive high, columns sink low
    let rows = [
        Output::new(p.P0_21, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_22, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_15, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_24, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_19, Level::Low, OutputDrive::Standard),
    ];
    let cols = [
        Output::new(p.P0_28, Level::High, OutputDrive::Standard),
        Output::new(p.P0_11, Level::High, OutputDrive::Standard),
        Output::new(p.P0_31, Level::High, OutputDrive::Standard),
        Output::new(p.P1_05, Level::High, OutputDrive::Standard),
        Output::new(p.P0_30, Level::High, OutputDrive::Standard),
    ];
    let matrix = unwrap!(LedMatrix::new(rows, cols));
    info!("LED matrix initialized");

    // Buttons have external pull-ups
    let button_a = Input::new(p.P0_14, Pull::None);
    let button_b = Input::new(p.P0_23, Pull::None);

    let speaker = Output::new(p.P0_00, Level::Low, OutputDrive::Standard);

    // Internal I2C bus to the motion sensor
    let twim_config = twim::Config::default();
    let tx_buf = TWIM_TX_BUF.init([0u8; 16]);
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_16, p.P0_08, twim_config, tx_buf);
    info!("I2C initialized for LSM303AGR");

    let game = Game::with_rules(
        SharedSensors::new(start),
        ChannelDisplay::new(),
        ChannelAudio,
        BoardPlatform::new(rng),
        rules,
    );

    // Spawn tasks
    spawner.spawn(tasks::tick_task(rules.tick_interval_ms)).unwrap();
    spawner
        .spawn(tasks::display_task(matrix, board.row_scan_us))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button_a, button_b, board.button_poll_ms))
        .unwrap();
    spawner.spawn(tasks::motion_task(i2c, board)).unwrap();
    spawner.spawn(tasks::speaker_task(speaker)).unwrap();
    spawner.spawn(tasks::audio_task()).unwrap();
    spawner.spawn(tasks::game_task(game)).unwrap();

    info!("All tasks spawned, firmware running");
}
