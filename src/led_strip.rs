//! The 25-LED WS2812 chain behind the matrix, driven by PIO0 with DMA.
//!
//! Bit timing (800 kHz, GRB byte order) comes from `embassy-rp`'s WS2812 PIO
//! program. This module only adds the inter-frame idle time the strip needs to
//! latch and plugs the driver into [`UpdatePixels`].

use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{DMA_CH0, PIN_7, PIO0};
use embassy_rp::pio::{Common, InterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_time::Timer;

use crate::{LATCH_DELAY, LED_COUNT, PixelBuffer, Result, UpdatePixels};

bind_interrupts!(pub struct Pio0Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

/// DMA-fed WS2812 driver for the matrix.
pub struct LedStrip {
    // Held so the PIO block stays claimed for as long as the driver exists.
    _common: Common<'static, PIO0>,
    driver: PioWs2812<'static, PIO0, 0, LED_COUNT>,
}

impl LedStrip {
    /// Loads the WS2812 program into PIO0 and binds state machine 0 to `pin`.
    #[must_use]
    pub fn new(pio: PIO0, dma: DMA_CH0, pin: PIN_7) -> Self {
        let Pio {
            mut common, sm0, ..
        } = Pio::new(pio, Pio0Irqs);
        let program = PioWs2812Program::new(&mut common);
        let driver = PioWs2812::new(&mut common, sm0, dma, pin, &program);
        Self {
            _common: common,
            driver,
        }
    }
}

impl UpdatePixels for LedStrip {
    async fn update_pixels(&mut self, pixels: &PixelBuffer) -> Result<()> {
        self.driver.write(pixels.as_array()).await;
        Timer::after(LATCH_DELAY).await;
        Ok(())
    }
}
