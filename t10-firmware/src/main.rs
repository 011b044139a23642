//! T10 - 24-hour analog watch face firmware
//!
//! Main firmware binary for RP2040 boards driving a 144x168 Sharp memory
//! LCD. The hour hand makes one turn per day; the RTC keeps time.
//!
//! Pin assignments (SPI0):
//! - GPIO18: SCLK
//! - GPIO19: MOSI
//! - GPIO17: SCS (active high)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::bind_interrupts;
use embassy_rp::rtc::{self, Rtc};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use t10_core::traits::WatchApp;
use t10_core::T10Face;
use t10_display::{FontRegistry, LayerCompositor};

use crate::app_info::APP_INFO;
use crate::memlcd::MemoryLcd;

/// Embedded configuration (compiled into firmware)
/// Edit face.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../face.toml");

bind_interrupts!(struct Irqs {
    RTC_IRQ => rtc::InterruptHandler;
});

/// SPI clock for the memory LCD (panel maximum is 2 MHz)
const LCD_SPI_HZ: u32 = 2_000_000;

mod app_info;
mod channels;
mod config;
mod memlcd;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!(
        "{} v{}.{} by {} starting...",
        APP_INFO.name, APP_INFO.version_major, APP_INFO.version_minor, APP_INFO.author
    );
    debug!("App UUID {:02x}", APP_INFO.uuid);

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load(EMBEDDED_CONFIG);

    // Seed the RTC; it keeps counting from here
    let mut rtc = Rtc::new(p.RTC, Irqs);
    if let Err(e) = rtc.set_datetime(config::to_rtc(&config.clock.seed)) {
        warn!("Failed to seed RTC: {}", Debug2Format(&e));
    }
    info!("RTC seeded");

    // Setup SPI for the memory LCD (write only)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = LCD_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, Level::Low);

    let mut lcd = MemoryLcd::new(spi, cs, Delay);
    match lcd.init().await {
        Ok(()) => info!("LCD initialized"),
        Err(e) => error!("LCD init failed: {}", e),
    }

    // Build the face and let it claim its fonts and layers
    let mut compositor = LayerCompositor::new(FontRegistry::bundled());
    let mut face = T10Face::new(config.palette());
    if let Err(e) = face.on_init(&mut compositor, config.clock.seed) {
        defmt::panic!("Face init failed: {}", e);
    }
    info!("Face initialized ({} layers)", compositor.layer_count());

    // Spawn tasks
    unwrap!(spawner.spawn(tasks::face_task(face, compositor, lcd)));
    unwrap!(spawner.spawn(tasks::tick_task(rtc)));

    info!("All tasks spawned");
}
