use embassy_rp::gpio::{self, Level};

use crate::{ButtonRole, button::Button, led_strip::LedStrip};

/// Everything on the board, wired as on the BitDogLab Pico carrier.
///
/// | Function          | GPIO |
/// |-------------------|------|
/// | Button A (+1)     | 5    |
/// | Button B (-1)     | 6    |
/// | WS2812 matrix     | 7    |
/// | RGB LED, green    | 11   |
/// | RGB LED, blue     | 12   |
/// | RGB LED, red      | 13   |
pub struct Hardware {
    pub button_a: Button,
    pub button_b: Button,
    pub led_strip: LedStrip,
    /// Heartbeat output.
    pub status_red: gpio::Output<'static>,
    pub status_green: gpio::Output<'static>,
    pub status_blue: gpio::Output<'static>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let button_a = Button::new(peripherals.PIN_5, ButtonRole::Increment);
        let button_b = Button::new(peripherals.PIN_6, ButtonRole::Decrement);

        let led_strip = LedStrip::new(peripherals.PIO0, peripherals.DMA_CH0, peripherals.PIN_7);

        let status_green = gpio::Output::new(peripherals.PIN_11, Level::Low);
        let status_blue = gpio::Output::new(peripherals.PIN_12, Level::Low);
        let status_red = gpio::Output::new(peripherals.PIN_13, Level::Low);

        Self {
            button_a,
            button_b,
            led_strip,
            status_red,
            status_green,
            status_blue,
        }
    }
}
