//! Host-level tests for the polling loop, with a recording strip and pin in place of hardware.
#![cfg(feature = "host")]

use core::convert::Infallible;

use embassy_futures::block_on;
use embassy_time::Instant;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};
use led_digit_counter::{
    BlinkState, ButtonRole, DeviceState, Digit, Error, LoopEvents, MainLoop, ON_COLOR,
    PixelBuffer, PressOutcome, Result, UpdatePixels, colors,
};

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

fn digit(value: u8) -> Digit {
    Digit::new(value).expect("test digits are in range")
}

fn frame_of(shown: Digit) -> PixelBuffer {
    let mut pixels = PixelBuffer::new();
    pixels.render_digit(shown);
    pixels
}

/// Remembers every frame it is asked to show.
#[derive(Default)]
struct RecordingStrip {
    frames: Vec<PixelBuffer>,
}

impl UpdatePixels for RecordingStrip {
    async fn update_pixels(&mut self, pixels: &PixelBuffer) -> Result<()> {
        self.frames.push(*pixels);
        Ok(())
    }
}

/// Remembers every level it is driven to.
#[derive(Default)]
struct RecordingPin {
    levels: Vec<bool>,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

#[derive(Debug)]
struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

struct FailingPin;

impl ErrorType for FailingPin {
    type Error = PinFault;
}

impl OutputPin for FailingPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        Err(PinFault)
    }
}

/// A strip whose transfer is long enough for a button press to land in the middle of it.
struct SlowStrip<'a> {
    state: &'a DeviceState,
    press_at: Option<Instant>,
    frames: Vec<PixelBuffer>,
}

impl UpdatePixels for SlowStrip<'_> {
    async fn update_pixels(&mut self, pixels: &PixelBuffer) -> Result<()> {
        self.frames.push(*pixels);
        if let Some(now) = self.press_at.take() {
            assert!(matches!(
                self.state.press(ButtonRole::Increment, now),
                PressOutcome::Accepted(_)
            ));
        }
        Ok(())
    }
}

#[test]
fn blank_sends_one_dark_frame() {
    let state = DeviceState::new();
    let mut main_loop =
        MainLoop::new(&state, RecordingStrip::default(), RecordingPin::default(), at(0));

    block_on(main_loop.blank()).expect("recording strip never fails");

    let frames = &main_loop.strip().frames;
    assert_eq!(frames.len(), 1);
    assert!(frames[0].iter().all(|&color| color == colors::BLACK));
}

#[test]
fn idle_poll_does_nothing() {
    let state = DeviceState::new();
    let mut main_loop =
        MainLoop::new(&state, RecordingStrip::default(), RecordingPin::default(), at(0));

    for ms in [0, 10, 50, 99] {
        let events = block_on(main_loop.poll(at(ms))).expect("nothing can fail");
        assert_eq!(events, LoopEvents::default());
    }
    assert!(main_loop.strip().frames.is_empty());
    assert!(main_loop.status_led().levels.is_empty());
}

#[test]
fn decrement_from_zero_redraws_nine_once() {
    let state = DeviceState::new();
    let mut main_loop =
        MainLoop::new(&state, RecordingStrip::default(), RecordingPin::default(), at(0));

    state.press(ButtonRole::Decrement, at(1_000));
    let events = block_on(main_loop.poll(at(1_050))).expect("nothing can fail");

    assert_eq!(events.redrawn, Some(digit(9)));
    assert!(!state.is_redraw_pending());
    assert_eq!(main_loop.strip().frames, [frame_of(digit(9))]);
    assert_eq!(main_loop.pixels(), &frame_of(digit(9)));

    let events = block_on(main_loop.poll(at(1_060))).expect("nothing can fail");
    assert_eq!(events.redrawn, None);
    assert_eq!(main_loop.strip().frames.len(), 1);
}

#[test]
fn redrawn_frame_uses_the_digit_color() {
    let state = DeviceState::new();
    let mut main_loop =
        MainLoop::new(&state, RecordingStrip::default(), RecordingPin::default(), at(0));

    state.press(ButtonRole::Increment, at(1_000));
    block_on(main_loop.poll(at(1_000))).expect("nothing can fail");

    let frame = main_loop.pixels();
    assert!(frame.lit_count() > 0);
    assert!(frame.iter().all(|&color| color == ON_COLOR || color == colors::BLACK));
}

#[test]
fn status_led_follows_the_blink_schedule() {
    let state = DeviceState::new();
    let mut main_loop =
        MainLoop::new(&state, RecordingStrip::default(), RecordingPin::default(), at(0));

    let events = block_on(main_loop.poll(at(100))).expect("nothing can fail");
    assert_eq!(events.blink, Some(BlinkState::On));
    assert_eq!(events.redrawn, None);

    block_on(main_loop.poll(at(150))).expect("nothing can fail");
    block_on(main_loop.poll(at(200))).expect("nothing can fail");

    assert_eq!(main_loop.status_led().levels, [true, false]);
    assert_eq!(main_loop.blink().state(), BlinkState::Off);
    assert!(main_loop.strip().frames.is_empty());
}

#[test]
fn blink_and_redraw_can_happen_in_the_same_iteration() {
    let state = DeviceState::new();
    let mut main_loop =
        MainLoop::new(&state, RecordingStrip::default(), RecordingPin::default(), at(900));

    state.press(ButtonRole::Increment, at(950));
    let events = block_on(main_loop.poll(at(1_000))).expect("nothing can fail");

    assert_eq!(
        events,
        LoopEvents {
            blink: Some(BlinkState::On),
            redrawn: Some(digit(1)),
        }
    );
}

#[test]
fn press_during_a_redraw_is_drawn_on_the_next_iteration() {
    let state = DeviceState::new();
    let strip = SlowStrip {
        state: &state,
        press_at: Some(at(1_300)),
        frames: Vec::new(),
    };
    let mut main_loop = MainLoop::new(&state, strip, RecordingPin::default(), at(1_000));

    state.press(ButtonRole::Increment, at(1_010));
    let events = block_on(main_loop.poll(at(1_020))).expect("nothing can fail");
    assert_eq!(events.redrawn, Some(digit(1)));

    // The press landed while frame "1" was going out; it must not be lost.
    assert!(state.is_redraw_pending());
    let events = block_on(main_loop.poll(at(1_030))).expect("nothing can fail");
    assert_eq!(events.redrawn, Some(digit(2)));

    assert_eq!(
        main_loop.strip().frames,
        [frame_of(digit(1)), frame_of(digit(2))]
    );
}

#[test]
fn pin_failure_is_reported() {
    let state = DeviceState::new();
    let mut main_loop = MainLoop::new(&state, RecordingStrip::default(), FailingPin, at(0));

    let result = block_on(main_loop.poll(at(100)));
    assert!(matches!(result, Err(Error::CannotSetOutputState)));
}

#[test]
fn strip_can_be_borrowed_mutably() {
    let state = DeviceState::new();
    let mut strip = RecordingStrip::default();
    {
        let mut main_loop = MainLoop::new(&state, &mut strip, RecordingPin::default(), at(0));
        block_on(main_loop.blank()).expect("recording strip never fails");
    }
    assert_eq!(strip.frames.len(), 1);
}
