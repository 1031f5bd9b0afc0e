//! Heartbeat blinking for the status LED, driven by polling instead of timers.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::PinState;

use crate::BLINK_PERIOD;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, defmt::Format)]
pub enum BlinkState {
    #[default]
    Off,
    On,
}

impl BlinkState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl From<BlinkState> for PinState {
    fn from(state: BlinkState) -> Self {
        match state {
            BlinkState::Off => Self::Low,
            BlinkState::On => Self::High,
        }
    }
}

/// Decides when the status LED flips.
///
/// Call [`poll`](Self::poll) as often as convenient. A flip happens on the first poll at
/// or after the deadline, and the next deadline is one period after *that poll*: a late
/// poll produces a single flip, never a burst of catch-up flips.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlinkScheduler {
    state: BlinkState,
    deadline: Instant,
    period: Duration,
}

impl BlinkScheduler {
    /// Starts with the LED off and the first flip [`BLINK_PERIOD`] after `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self::with_period(now, BLINK_PERIOD)
    }

    #[must_use]
    pub fn with_period(now: Instant, period: Duration) -> Self {
        Self {
            state: BlinkState::Off,
            deadline: Self::deadline_after(now, period),
            period,
        }
    }

    /// Returns the new state if it is time to flip, `None` otherwise.
    pub fn poll(&mut self, now: Instant) -> Option<BlinkState> {
        if now < self.deadline {
            return None;
        }
        self.state = self.state.toggled();
        self.deadline = Self::deadline_after(now, self.period);
        Some(self.state)
    }

    #[must_use]
    pub const fn state(&self) -> BlinkState {
        self.state
    }

    #[must_use]
    pub const fn deadline(&self) -> Instant {
        self.deadline
    }

    fn deadline_after(now: Instant, period: Duration) -> Instant {
        now.checked_add(period).unwrap_or(Instant::MAX)
    }
}
