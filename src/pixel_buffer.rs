//! In-memory state of the 5x5 matrix and the seam to whatever transmits it.

use core::ops::Deref;

use smart_leds::RGB8;
pub use smart_leds::colors;

use crate::{Digit, Error, LED_COUNT, ON_COLOR, Result, font};

/// RGB color representation re-exported from `smart_leds`.
pub type Rgb = RGB8;

/// One color per LED, in strip index order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PixelBuffer([Rgb; LED_COUNT]);

impl PixelBuffer {
    /// A buffer with every LED off.
    #[must_use]
    pub const fn new() -> Self {
        Self([colors::BLACK; LED_COUNT])
    }

    /// Turns every LED off.
    pub fn clear(&mut self) {
        self.0.fill(colors::BLACK);
    }

    /// Sets one LED.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelIndexOutOfBounds`] if `index >= LED_COUNT`.
    pub fn set(&mut self, index: usize, color: Rgb) -> Result<()> {
        let pixel = self
            .0
            .get_mut(index)
            .ok_or(Error::PixelIndexOutOfBounds(index))?;
        *pixel = color;
        Ok(())
    }

    /// Overwrites the whole buffer with the glyph for `digit`: lit pixels get
    /// [`ON_COLOR`], everything else is cleared.
    pub fn render_digit(&mut self, digit: Digit) {
        self.render_digit_with(digit, ON_COLOR);
    }

    /// Like [`render_digit`](Self::render_digit) with a caller-chosen color.
    pub fn render_digit_with(&mut self, digit: Digit, on_color: Rgb) {
        self.clear();
        for (pixel, lit) in self.0.iter_mut().zip(font::glyph(digit).pixels()) {
            if lit {
                *pixel = on_color;
            }
        }
    }

    /// Number of LEDs that are not black.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&pixel| pixel != colors::BLACK).count()
    }

    #[must_use]
    pub const fn as_array(&self) -> &[Rgb; LED_COUNT] {
        &self.0
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for PixelBuffer {
    type Target = [Rgb; LED_COUNT];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Anything that can push a full frame to the LEDs.
///
/// The firmware implements this for the PIO-driven WS2812 strip; tests implement it
/// with an in-memory recorder.
#[expect(async_fn_in_trait, reason = "single-threaded executor; futures need not be Send")]
pub trait UpdatePixels {
    /// Transmits `pixels` and returns once the strip has latched them.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be handed to the strip.
    async fn update_pixels(&mut self, pixels: &PixelBuffer) -> Result<()>;
}

impl<T: UpdatePixels> UpdatePixels for &mut T {
    async fn update_pixels(&mut self, pixels: &PixelBuffer) -> Result<()> {
        (**self).update_pixels(pixels).await
    }
}
