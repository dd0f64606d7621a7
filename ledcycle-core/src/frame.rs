//! WS2812 bit-level signal generation.
//!
//! Each colour bit goes on the wire as a high pulse followed by a low
//! pulse; the pulse widths decide whether the LED reads a 0 or a 1.
//! Durations are ticks of the 10MHz transmit clock (0.1us per tick).

use crate::rgb::{Rgb, RgbLayout};

/// Tick rate all pulse durations are expressed in (0.1us per tick).
pub const TICK_HZ: u32 = 10_000_000;

/// Bits per frame: 8 bits for each of the three colour channels.
pub const FRAME_BITS: usize = 24;

// Bit waveforms. The nominal '0' high time is 0.35us, which does not land
// on a tick boundary at 0.1us resolution; 4 ticks is within WS2812
// tolerance and matches what the LED actually latches.
const ONE: BitPulse = BitPulse { high: 7, low: 6 }; // 0.7us / 0.6us
const ZERO: BitPulse = BitPulse { high: 4, low: 8 }; // 0.4us / 0.8us

/// High/low tick pair carrying one colour bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitPulse {
    pub high: u16,
    pub low: u16,
}

/// One complete single-LED update.
pub type Frame = [BitPulse; FRAME_BITS];

/// Expands a colour into its 24-pulse wire frame: channels in GRB order,
/// each channel MSB first.
pub fn encode(colour: Rgb) -> Frame {
    let grb = colour.to_u32(RgbLayout::Grb);
    let mut frame = [ZERO; FRAME_BITS];
    for i in (0..FRAME_BITS).rev() {
        if (grb >> i) & 1 == 1 {
            frame[FRAME_BITS - 1 - i] = ONE;
        }
    }
    frame
}
