//! A 0-9 counter on a 5x5 WS2812 matrix, stepped by two buttons, with a heartbeat LED.
//!
//! Runs on a Raspberry Pi Pico RP2040. Button A counts up, button B counts down.
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

use core::convert::Infallible;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_time::Instant;
use led_digit_counter::{
    DeviceState, MainLoop, Result, button::button_task, hardware::Hardware,
};
use {defmt_rtt as _, panic_probe as _};

static DEVICE_STATE: DeviceState = DeviceState::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // If it returns, something went wrong.
    let Err(err) = inner_main(spawner).await;
    error!("{}", defmt::Display2Format(&err));
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let hardware = Hardware::default();

    spawner.spawn(button_task(hardware.button_a, &DEVICE_STATE))?;
    spawner.spawn(button_task(hardware.button_b, &DEVICE_STATE))?;

    // Only red blinks; green and blue are held low for the life of the program.
    let _rgb_off = (hardware.status_green, hardware.status_blue);

    let mut main_loop = MainLoop::new(
        &DEVICE_STATE,
        hardware.led_strip,
        hardware.status_red,
        Instant::now(),
    );
    main_loop.blank().await?;
    info!("Counter ready at {}", DEVICE_STATE.digit().get());

    loop {
        let events = main_loop.poll(Instant::now()).await?;
        if let Some(digit) = events.redrawn {
            info!("Redrew digit {}", digit.get());
        }
        yield_now().await;
    }
}
