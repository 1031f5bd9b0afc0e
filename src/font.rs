//! Built-in 5x5 digit glyphs.
//!
//! Each glyph is five rows of five bits, most significant bit first. Rows and
//! bits are listed in strip index order: pixel 0 is the leftmost bit of the
//! first row, pixel 24 the rightmost bit of the last row. The glyphs are
//! already arranged for the board's serpentine wiring, so they are copied to
//! the strip without remapping.

use crate::{COLS, DIGIT_COUNT, Digit, ROWS};

/// One 5x5 bitmap.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub struct Glyph([u8; ROWS]);

impl Glyph {
    const ROW_MASK: u8 = 0b1_1111;

    /// Wraps raw rows. Only the low five bits of each row are used.
    #[must_use]
    pub const fn new(rows: [u8; ROWS]) -> Self {
        Self(rows)
    }

    #[must_use]
    pub const fn rows(&self) -> &[u8; ROWS] {
        &self.0
    }

    /// Whether the pixel at strip `index` is lit, or `None` past the last pixel.
    #[must_use]
    pub fn is_lit(&self, index: usize) -> Option<bool> {
        self.pixels().nth(index)
    }

    /// All 25 pixels in strip index order, `true` for lit.
    pub fn pixels(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().flat_map(|&row| {
            (0..COLS_U32)
                .rev()
                .map(move |shift| row.checked_shr(shift).is_some_and(|bits| (bits & 1) == 1))
        })
    }

    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0
            .iter()
            .map(|row| (row & Self::ROW_MASK).count_ones() as usize)
            .sum()
    }
}

#[expect(clippy::cast_possible_truncation, reason = "COLS is 5")]
const COLS_U32: u32 = COLS as u32;

/// Glyphs for 0 through 9, indexed by digit.
pub static DIGIT_FONT: [Glyph; DIGIT_COUNT] = FONT;

const FONT: [Glyph; DIGIT_COUNT] = [
    // 0
    Glyph::new([0b11111, 0b10001, 0b10001, 0b10001, 0b11111]),
    // 1
    Glyph::new([0b01110, 0b00100, 0b00100, 0b01100, 0b00100]),
    // 2
    Glyph::new([0b11111, 0b10000, 0b11111, 0b00001, 0b11111]),
    // 3
    Glyph::new([0b11111, 0b00001, 0b11111, 0b00001, 0b11111]),
    // 4
    Glyph::new([0b10000, 0b00001, 0b11111, 0b10001, 0b10001]),
    // 5
    Glyph::new([0b11111, 0b00001, 0b11111, 0b10000, 0b11111]),
    // 6
    Glyph::new([0b11111, 0b10001, 0b11111, 0b00001, 0b11111]),
    // 7
    Glyph::new([0b00010, 0b00100, 0b01000, 0b00001, 0b11111]),
    // 8
    Glyph::new([0b11111, 0b10001, 0b11111, 0b10001, 0b11111]),
    // 9
    Glyph::new([0b11111, 0b00001, 0b11111, 0b10001, 0b11111]),
];

// Every row must fit in the five columns.
const _: () = {
    let mut digit = 0;
    while digit < DIGIT_COUNT {
        let mut row = 0;
        while row < ROWS {
            assert!(FONT[digit].0[row] & !Glyph::ROW_MASK == 0);
            row += 1;
        }
        digit += 1;
    }
};

/// The glyph for `digit`.
#[must_use]
#[expect(clippy::indexing_slicing, reason = "a Digit is always below DIGIT_COUNT")]
pub fn glyph(digit: Digit) -> &'static Glyph {
    &DIGIT_FONT[digit.index()]
}
