// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Digit counter driven by the button flags.

use crate::board::Board;
use crate::digit::Digit;
use crate::matrix;
use crate::service::{Service, ServiceContext};
use core::cell::Cell;

/// Consumes pending presses, steps the digit and redraws the matrix.
///
/// Button A is handled before button B. When both are pending in the same
/// pass, the matrix is drawn twice.
pub struct DigitService {
    digit: Cell<Digit>,
}

impl DigitService {
    pub fn new() -> Self {
        Self::starting_at(Digit::ZERO)
    }

    pub fn starting_at(digit: Digit) -> Self {
        Self {
            digit: Cell::new(digit),
        }
    }

    pub fn digit(&self) -> Digit {
        self.digit.get()
    }

    fn show<P: Board>(&self, ctx: &mut ServiceContext<P>, digit: Digit) {
        self.digit.set(digit);
        #[cfg(feature = "defmt")]
        defmt::info!("Digit: {}", digit.value());
        matrix::render_digit(ctx.peripherals.matrix(), digit);
    }
}

impl Default for DigitService {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Board> Service<P> for DigitService {
    fn process(&self, ctx: &mut ServiceContext<P>) {
        if ctx.device.button_a.take() {
            self.show(ctx, self.digit.get().next());
        }

        if ctx.device.button_b.take() {
            self.show(ctx, self.digit.get().prev());
        }
    }
}
