use embassy_time::Duration;
use smart_leds::RGB8;

/// Rows in the LED matrix.
pub const ROWS: usize = 5;
/// Columns in the LED matrix.
pub const COLS: usize = 5;
/// Pixels on the WS2812 strip that forms the matrix.
pub const LED_COUNT: usize = ROWS * COLS;

/// Number of distinct values the counter can show.
pub const DIGIT_COUNT: usize = 10;

/// Presses closer than this to the last accepted press (of either button) are ignored.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);
/// Half-period of the heartbeat LED.
pub const BLINK_PERIOD: Duration = Duration::from_millis(100);
/// Idle time the strip needs after a frame before it latches.
pub const LATCH_DELAY: Duration = Duration::from_micros(100);

/// Green intensity of a lit glyph pixel. Override at build time with `DIGIT_BRIGHTNESS=<0-255>`.
pub const DIGIT_BRIGHTNESS: u8 = parse_u8(env!("DIGIT_BRIGHTNESS"));
/// Color of a lit glyph pixel.
pub const ON_COLOR: RGB8 = RGB8 {
    r: 0,
    g: DIGIT_BRIGHTNESS,
    b: 0,
};

// `build.rs` has already rejected anything that is not a `u8`.
#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "index is bounds-checked by the loop and `byte` is an ASCII digit"
)]
const fn parse_u8(text: &str) -> u8 {
    let bytes = text.as_bytes();
    let mut value: u8 = 0;
    let mut index = 0;
    while index < bytes.len() {
        let byte = bytes[index];
        assert!(byte.is_ascii_digit(), "DIGIT_BRIGHTNESS must be decimal");
        value = match value.checked_mul(10) {
            Some(tens) => match tens.checked_add(byte - b'0') {
                Some(sum) => sum,
                None => panic!("DIGIT_BRIGHTNESS must fit in a u8"),
            },
            None => panic!("DIGIT_BRIGHTNESS must fit in a u8"),
        };
        index += 1;
    }
    value
}
