use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::OutputPin;
use esp_idf_hal::peripherals::Peripherals;

use ledcycle_core::rgb;
use ledcycle_core::seq::{self, Step};

use crate::ws2812::Ws2812Rmt;

mod ws2812;

// Demo cycle: each colour with its hold time
const DEMO: [Step; 6] = [
    Step::new(rgb::GREEN, 3000),
    Step::new(rgb::OFF, 1000),
    Step::new(rgb::RED, 2000),
    Step::new(rgb::OFF, 1000),
    Step::new(rgb::BLUE, 2000),
    Step::new(rgb::OFF, 1000),
];

fn main() -> anyhow::Result<()> {
    esp_idf_hal::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!(
        "Starting colour cycle [build {} {}]",
        env!("BUILD_TS"),
        env!("BUILD_PROFILE")
    );

    let peripherals = Peripherals::take()?;

    // Onboard WS2812 LED (data pin = GPIO21)
    let led = peripherals.pins.gpio21.downgrade_output();
    let channel = peripherals.rmt.channel0;
    let mut status = Ws2812Rmt::new(led, channel)?;

    loop {
        seq::run_once(&mut status, FreeRtos::delay_ms, &DEMO)?;
    }
}
