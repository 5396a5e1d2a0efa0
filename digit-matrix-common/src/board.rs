// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Board peripherals as seen by the main-loop services.

use crate::matrix::WordSink;
use embedded_hal::digital::OutputPin;

/// Everything a service may touch from the main loop.
pub trait Board {
    type StatusLed: OutputPin;
    type Matrix: WordSink;

    /// Monotonic microseconds since boot.
    fn now_us(&self) -> u64;

    fn status_led(&mut self) -> &mut Self::StatusLed;

    fn matrix(&mut self) -> &mut Self::Matrix;
}
