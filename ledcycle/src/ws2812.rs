use anyhow::{ensure, Result};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::AnyOutputPin;
use esp_idf_hal::rmt::{config::TransmitConfig, FixedLengthSignal, PinState, Pulse, PulseTicks, TxRmtDriver};

use ledcycle_core::frame::{self, FRAME_BITS, TICK_HZ};
use ledcycle_core::rgb::Rgb;
use ledcycle_core::seq::LedWrite;

// APB clock is 80MHz; divide down to the 10MHz tick rate the frame
// durations are expressed in
const CLOCK_DIVIDER: u8 = 8;

// The LED latches a frame after >50us of quiet line; a full FreeRTOS tick
// is the shortest blocking delay available and covers it
const LATCH_MS: u32 = 1;

pub type Ws2812RmtChannel = esp_idf_hal::rmt::CHANNEL0;

// Driver for a single WS2812 on RMT Channel 0 - typically the onboard LED
pub struct Ws2812Rmt<'a> {
    tx: TxRmtDriver<'a>,
}

impl Ws2812Rmt<'_> {
    pub fn new(led: AnyOutputPin, channel: Ws2812RmtChannel) -> Result<Self> {
        let config = TransmitConfig::new().clock_divider(CLOCK_DIVIDER);
        let tx = TxRmtDriver::new(channel, led, &config)?;
        // One RMT memory block holds 64 symbols, plenty for a 24-bit frame
        let clock = tx.counter_clock()?;
        ensure!(
            clock.0 == TICK_HZ,
            "RMT counter clock is {} Hz (need {} Hz)",
            clock.0,
            TICK_HZ
        );
        Ok(Self { tx })
    }

    /// Sends one frame and blocks through the latch interval, so a
    /// following call starts a fresh frame.
    pub fn set(&mut self, rgb: Rgb) -> Result<()> {
        let mut signal = FixedLengthSignal::<FRAME_BITS>::new();
        for (i, bit) in frame::encode(rgb).iter().enumerate() {
            let high = Pulse::new(PinState::High, PulseTicks::new(bit.high)?);
            let low = Pulse::new(PinState::Low, PulseTicks::new(bit.low)?);
            signal.set(i, &(high, low))?;
        }
        self.tx.start_blocking(&signal)?;
        FreeRtos::delay_ms(LATCH_MS);
        Ok(())
    }
}

impl LedWrite for Ws2812Rmt<'_> {
    type Error = anyhow::Error;

    fn set(&mut self, colour: Rgb) -> Result<()> {
        Ws2812Rmt::set(self, colour)
    }
}
