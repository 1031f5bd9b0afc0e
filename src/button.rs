//! Momentary push-buttons wired to ground, read with the internal pull-up.

use defmt::info;
use embassy_rp::Peripheral;
use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_time::Instant;

use crate::{ButtonRole, DeviceState, PressOutcome};

pub struct Button {
    inner: Input<'static>,
    role: ButtonRole,
}

impl Button {
    /// Configures `pin` as a pull-up input. The line idles high and a press pulls it low.
    #[must_use]
    pub fn new(pin: impl Peripheral<P = impl Pin> + 'static, role: ButtonRole) -> Self {
        Self {
            inner: Input::new(pin, Pull::Up),
            role,
        }
    }

    #[must_use]
    pub const fn role(&self) -> ButtonRole {
        self.role
    }

    /// Waits for the next falling edge and returns when it was seen.
    ///
    /// No debouncing happens here; contact bounce shows up as extra edges and is
    /// filtered by [`DeviceState::press`].
    pub async fn wait_for_press(&mut self) -> Instant {
        self.inner.wait_for_falling_edge().await;
        Instant::now()
    }
}

/// Feeds every edge from `button` into the shared state. One instance per button.
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut button: Button, state: &'static DeviceState) -> ! {
    loop {
        let pressed_at = button.wait_for_press().await;
        if let PressOutcome::Accepted(digit) = state.press(button.role(), pressed_at) {
            info!("{:?} press: counter is now {}", button.role(), digit.get());
        }
    }
}
