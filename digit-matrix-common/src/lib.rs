// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and logic for the digit matrix firmware.
//!
//! Everything the board does that is not register access lives here, so it
//! can be tested on the host:
//! - Default: `no_std` mode for embedded targets
//! - `std` feature: Enables `std` support for host tools
//! - `embedded` feature: RP2040 PIO transmit FIFO as a matrix word sink
//! - `defmt` feature: `defmt::Format` derives and service logging

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bitmap;
pub mod board;
pub mod color;
pub mod config;
pub mod debounce;
pub mod digit;
pub mod dispatch;
pub mod matrix;
pub mod service;
pub mod services;
pub mod state;

// PIO sink for the WS2812 matrix (requires embedded feature)
#[cfg(feature = "embedded")]
pub mod pio;

// Re-export commonly used types
pub use board::Board;
pub use digit::Digit;
pub use dispatch::InterruptDispatcher;
pub use matrix::WordSink;
pub use state::{Button, DeviceState, PressFlag};
pub use config::{BLINK_PERIOD_US, DEBOUNCE_US, LOOP_PERIOD_MS, NUM_PIXELS};
