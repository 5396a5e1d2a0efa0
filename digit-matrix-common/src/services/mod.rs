// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Service implementations for the main loop.

pub mod blink;
pub mod digit;

pub use blink::StatusBlinkService;
pub use digit::DigitService;
