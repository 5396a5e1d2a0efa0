// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! RP2040 PIO transmit FIFO as a matrix sink.

use crate::matrix::WordSink;
use rp2040_hal::pio::{Tx, ValidStateMachine};

impl<SM: ValidStateMachine> WordSink for Tx<SM> {
    /// Spins while the FIFO is full.
    fn write_word(&mut self, word: u32) {
        while !self.write(word) {
            core::hint::spin_loop();
        }
    }
}
