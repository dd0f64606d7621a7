//! Hardware-free core for the WS2812 colour cycler: the colour type, the
//! bit-level frame encoder and the step sequencer. The firmware crate owns
//! the RMT peripheral and plugs in via the [`seq::LedWrite`] trait.

#![no_std]

pub mod frame;
pub mod rgb;
pub mod seq;

pub use frame::{encode, BitPulse, Frame, FRAME_BITS, TICK_HZ};
pub use rgb::{Rgb, RgbLayout};
pub use seq::{run_once, LedWrite, Step};
