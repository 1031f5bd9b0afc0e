//! The cooperative polling loop: heartbeat first, then redraw if a press asked for one.

use embassy_time::Instant;
use embedded_hal::digital::OutputPin;

use crate::{
    BlinkScheduler, BlinkState, DeviceState, Digit, Error, PixelBuffer, Result, UpdatePixels,
};

/// What one iteration of the loop did. Used by the firmware for logging.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, defmt::Format)]
pub struct LoopEvents {
    /// The status LED was switched to this state.
    pub blink: Option<BlinkState>,
    /// The matrix was redrawn with this digit.
    pub redrawn: Option<Digit>,
}

/// Owns everything the main loop touches: the pixel buffer, the strip, the status
/// LED and its blink schedule. Button handlers talk to it only through `DeviceState`.
pub struct MainLoop<'a, S, P> {
    state: &'a DeviceState,
    strip: S,
    status_led: P,
    blink: BlinkScheduler,
    pixels: PixelBuffer,
}

impl<'a, S, P> MainLoop<'a, S, P>
where
    S: UpdatePixels,
    P: OutputPin,
{
    /// Sets up the loop with a cleared buffer and the first blink one period after `now`.
    pub fn new(state: &'a DeviceState, strip: S, status_led: P, now: Instant) -> Self {
        Self {
            state,
            strip,
            status_led,
            blink: BlinkScheduler::new(now),
            pixels: PixelBuffer::new(),
        }
    }

    /// Sends the (cleared) buffer once so the matrix starts dark.
    ///
    /// # Errors
    ///
    /// Returns an error if the strip rejects the frame.
    pub async fn blank(&mut self) -> Result<()> {
        self.pixels.clear();
        self.strip.update_pixels(&self.pixels).await
    }

    /// Runs one iteration at time `now`.
    ///
    /// Never waits for input: if nothing is due it returns immediately with empty
    /// [`LoopEvents`]. The only suspension is the strip transfer during a redraw.
    ///
    /// # Errors
    ///
    /// Returns an error if the status LED cannot be set or the strip rejects the frame.
    pub async fn poll(&mut self, now: Instant) -> Result<LoopEvents> {
        let mut events = LoopEvents::default();

        if let Some(blink_state) = self.blink.poll(now) {
            self.status_led
                .set_state(blink_state.into())
                .map_err(|_| Error::CannotSetOutputState)?;
            events.blink = Some(blink_state);
        }

        if let Some(digit) = self.state.take_redraw() {
            self.pixels.render_digit(digit);
            self.strip.update_pixels(&self.pixels).await?;
            events.redrawn = Some(digit);
        }

        Ok(events)
    }

    #[must_use]
    pub const fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    #[must_use]
    pub const fn blink(&self) -> &BlinkScheduler {
        &self.blink
    }

    pub const fn strip(&self) -> &S {
        &self.strip
    }

    pub const fn status_led(&self) -> &P {
        &self.status_led
    }
}
