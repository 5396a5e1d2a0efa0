// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Board bring-up and pin assignment.
//!
//! | GPIO | use                                   |
//! |------|---------------------------------------|
//! | 5    | button A, pull-up, falling edge        |
//! | 6    | button B, pull-up, falling edge        |
//! | 7    | WS2812 matrix data (PIO0 SM0)          |
//! | 13   | red channel of the RGB LED (status)    |
//!
//! The green (11) and blue (12) channels of the RGB LED stay unconfigured.

use digit_matrix_common::Board;
use rp2040_hal::clocks::init_clocks_and_plls;
use rp2040_hal::gpio::{bank0, FunctionPio0, FunctionSioInput, FunctionSioOutput, Pin, PullDown, PullUp};
use rp2040_hal::{pac, Clock, Sio, Timer, Watchdog};

use crate::matrix::{self, Matrix, MatrixTx};

/// External crystal on the board.
const XTAL_FREQ_HZ: u32 = 12_000_000;

pub type ButtonA = Pin<bank0::Gpio5, FunctionSioInput, PullUp>;
pub type ButtonB = Pin<bank0::Gpio6, FunctionSioInput, PullUp>;
pub type StatusLed = Pin<bank0::Gpio13, FunctionSioOutput, PullDown>;
pub type MatrixPin = Pin<bank0::Gpio7, FunctionPio0, PullDown>;

#[derive(Debug, Clone, Copy, defmt::Format)]
pub enum InitError {
    /// `pac::Peripherals::take` was already called.
    PeripheralsTaken,
    /// Crystal oscillator or PLL failed to start.
    Clocks,
    /// The WS2812 program did not fit into PIO0.
    PioInstall,
}

/// Peripherals driven from the main loop.
pub struct Peripherals {
    pub timer: Timer,
    pub status_led: StatusLed,
    pub matrix: Matrix,
}

/// Button lines, handed over to the interrupt handler.
pub struct Buttons {
    pub a: ButtonA,
    pub b: ButtonB,
}

impl Board for Peripherals {
    type StatusLed = StatusLed;
    type Matrix = MatrixTx;

    fn now_us(&self) -> u64 {
        self.timer.get_counter().ticks()
    }

    fn status_led(&mut self) -> &mut StatusLed {
        &mut self.status_led
    }

    fn matrix(&mut self) -> &mut MatrixTx {
        &mut self.matrix.tx
    }
}

/// Bring up clocks, GPIO and the matrix state machine.
pub fn init() -> Result<(Peripherals, Buttons), InitError> {
    let mut pac = pac::Peripherals::take().ok_or(InitError::PeripheralsTaken)?;
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .map_err(|_| InitError::Clocks)?;

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let sio = Sio::new(pac.SIO);
    let pins = rp2040_hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let status_led: StatusLed = pins.gpio13.into_push_pull_output();
    let buttons = Buttons {
        a: pins.gpio5.into_pull_up_input(),
        b: pins.gpio6.into_pull_up_input(),
    };

    let matrix_pin: MatrixPin = pins.gpio7.into_function();
    let sys_clk_hz = clocks.system_clock.freq().to_Hz();
    let matrix = matrix::init(pac.PIO0, &mut pac.RESETS, matrix_pin, sys_clk_hz)?;

    defmt::println!("Board ready, sys clock {} Hz", sys_clk_hz);

    Ok((
        Peripherals {
            timer,
            status_led,
            matrix,
        },
        buttons,
    ))
}

/// Microseconds since boot, read straight from the free-running timer.
///
/// Used for log timestamps, before and independent of [`init`].
pub fn uptime_us() -> u64 {
    // SAFETY: read-only access to RESETS and the raw timer counters
    let resets = unsafe { &*pac::RESETS::ptr() };
    if resets.reset_done().read().timer().bit_is_clear() {
        return 0;
    }

    let timer = unsafe { &*pac::TIMER::ptr() };
    loop {
        let hi = timer.timerawh().read().bits();
        let lo = timer.timerawl().read().bits();
        if timer.timerawh().read().bits() == hi {
            return (u64::from(hi) << 32) | u64::from(lo);
        }
    }
}
