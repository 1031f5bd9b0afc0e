//! The value shown on the matrix: a single decimal digit that wraps in both directions.

use crate::{Error, Result};

/// A decimal digit, `0..=9`.
///
/// Stepping past either end wraps around, so the counter behaves like a
/// ten-position dial.
///
/// ```
/// use led_digit_counter::Digit;
///
/// assert_eq!(Digit::ZERO.decrement(), Digit::MAX);
/// assert_eq!(Digit::MAX.increment(), Digit::ZERO);
/// assert_eq!(Digit::new(3)?.increment().get(), 4);
/// # Ok::<(), led_digit_counter::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub struct Digit(u8);

impl Digit {
    /// The starting value after power-on.
    pub const ZERO: Self = Self(0);
    /// The largest digit.
    pub const MAX: Self = Self(9);

    /// Creates a digit, rejecting anything above 9.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`] if `value > 9`.
    pub const fn new(value: u8) -> Result<Self> {
        if value > Self::MAX.0 {
            Err(Error::DigitOutOfRange(value))
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The next digit up, with 9 wrapping to 0.
    #[must_use]
    pub const fn increment(self) -> Self {
        if self.0 >= Self::MAX.0 {
            Self::ZERO
        } else {
            Self(self.0.saturating_add(1))
        }
    }

    /// The next digit down, with 0 wrapping to 9.
    #[must_use]
    pub const fn decrement(self) -> Self {
        if self.0 == 0 {
            Self::MAX
        } else {
            Self(self.0.saturating_sub(1))
        }
    }

    /// Position of this digit in 0-based tables such as the font.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}
