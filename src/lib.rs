//! A two-button 0-9 counter shown on a 5x5 WS2812 matrix, with a heartbeat LED.
//!
//! Button edges update a [`DeviceState`] of atomics; a cooperative [`MainLoop`] polls it,
//! blinks the status LED on a fixed schedule, and redraws the matrix only when a press
//! asked for it.
//!
//! Everything except the board-facing modules (`button`, `hardware`, `led_strip`, all
//! behind the `pico1` feature) builds and tests on the host.
#![no_std]

mod blink_state;
mod device_state;
mod digit;
mod error;
pub mod font;
mod main_loop;
mod pixel_buffer;
mod shared_constants;

#[cfg(feature = "pico1")]
pub mod button;
#[cfg(feature = "pico1")]
pub mod hardware;
#[cfg(feature = "pico1")]
pub mod led_strip;

// Re-export commonly used items
pub use blink_state::{BlinkScheduler, BlinkState};
pub use device_state::{ButtonRole, DeviceState, PressOutcome};
pub use digit::Digit;
pub use error::{Error, Result};
pub use font::{DIGIT_FONT, Glyph};
pub use main_loop::{LoopEvents, MainLoop};
pub use pixel_buffer::{PixelBuffer, Rgb, UpdatePixels, colors};
pub use shared_constants::*;
