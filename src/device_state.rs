//! State shared between the button handlers and the main loop.
//!
//! The button handlers are the only writers of the counter and the last-press
//! timestamp; the main loop only reads the counter. The redraw flag has one
//! setter (button handlers) and one clearer (main loop). Everything is a
//! lock-free atomic so the handlers never wait on the main loop.
//!
//! The flag is stored with `Release` after the counter is written and taken with
//! `Acquire` before the counter is read, so a main loop that sees the flag also
//! sees the digit that raised it.

use embassy_time::Instant;
use portable_atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering};

use crate::{DEBOUNCE_WINDOW, Digit};

/// Which way a button moves the counter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, defmt::Format)]
pub enum ButtonRole {
    /// Button A: 0, 1, ..., 9, 0, ...
    Increment,
    /// Button B: 0, 9, 8, ..., 0, ...
    Decrement,
}

impl ButtonRole {
    /// The digit this button moves `digit` to.
    #[must_use]
    pub const fn apply(self, digit: Digit) -> Digit {
        match self {
            Self::Increment => digit.increment(),
            Self::Decrement => digit.decrement(),
        }
    }
}

/// What happened to a button edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum PressOutcome {
    /// The press counted; the counter now shows this digit and a redraw is pending.
    Accepted(Digit),
    /// The press landed inside the debounce window and was dropped.
    Debounced,
}

/// Counter, debounce timestamp, and redraw flag for the whole device.
///
/// Create one as a `static` and hand out `&'static DeviceState` to the button tasks and
/// the main loop.
///
/// ```
/// use embassy_time::Instant;
/// use led_digit_counter::{ButtonRole, DeviceState, Digit, PressOutcome};
///
/// static STATE: DeviceState = DeviceState::new();
///
/// let outcome = STATE.press(ButtonRole::Decrement, Instant::from_millis(1_000));
/// assert_eq!(outcome, PressOutcome::Accepted(Digit::MAX));
/// assert_eq!(STATE.take_redraw(), Some(Digit::MAX));
/// assert_eq!(STATE.take_redraw(), None);
/// ```
#[derive(Debug)]
pub struct DeviceState {
    counter: AtomicU8,
    last_press_ticks: AtomicU64,
    redraw_pending: AtomicBool,
}

impl DeviceState {
    /// Power-on state: counter 0, last press at boot, nothing to redraw.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU8::new(Digit::ZERO.get()),
            last_press_ticks: AtomicU64::new(0),
            redraw_pending: AtomicBool::new(false),
        }
    }

    /// Handles one falling edge from the button with `role`, observed at `now`.
    ///
    /// An edge less than [`DEBOUNCE_WINDOW`] after the last accepted press (from
    /// either button) is dropped without touching any state. Otherwise the
    /// timestamp moves to `now`, the counter steps, and a redraw is requested.
    pub fn press(&self, role: ButtonRole, now: Instant) -> PressOutcome {
        let last_press = self.last_press();
        let outside_window = now
            .checked_duration_since(last_press)
            .is_some_and(|elapsed| elapsed >= DEBOUNCE_WINDOW);
        if !outside_window {
            return PressOutcome::Debounced;
        }
        self.last_press_ticks
            .store(now.as_ticks(), Ordering::Relaxed);

        let previous = self
            .counter
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |value| {
                Some(role.apply(Self::digit_from_raw(value)).get())
            })
            .unwrap_or_else(|value| value);
        let digit = role.apply(Self::digit_from_raw(previous));

        self.redraw_pending.store(true, Ordering::Release);
        PressOutcome::Accepted(digit)
    }

    /// Claims a pending redraw.
    ///
    /// Returns the digit to draw and lowers the flag, or `None` if nothing changed
    /// since the last claim. A press that lands after this call raises the flag
    /// again, so it is picked up by the next claim rather than lost.
    pub fn take_redraw(&self) -> Option<Digit> {
        self.redraw_pending
            .swap(false, Ordering::Acquire)
            .then(|| self.digit())
    }

    /// The digit the counter currently holds.
    #[must_use]
    pub fn digit(&self) -> Digit {
        Self::digit_from_raw(self.counter.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn is_redraw_pending(&self) -> bool {
        self.redraw_pending.load(Ordering::Acquire)
    }

    /// When the last accepted press happened (boot, if none yet).
    #[must_use]
    pub fn last_press(&self) -> Instant {
        Instant::from_ticks(self.last_press_ticks.load(Ordering::Relaxed))
    }

    // Only `press` writes the counter, and it only stores values produced by `Digit`.
    fn digit_from_raw(value: u8) -> Digit {
        Digit::new(value).unwrap_or(Digit::ZERO)
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}
