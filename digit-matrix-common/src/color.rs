// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Color words in the WS2812 FIFO layout.
//!
//! The matrix program shifts out the top 24 bits of every word, green first:
//!
//! ```text
//! 31      24 23      16 15       8 7        0
//! | green   | red      | blue     | unused   |
//! ```

use crate::config::ON_INTENSITY;

/// Word for a dark pixel.
pub const OFF: u32 = 0x0000_0000;

/// Pack normalized intensities into a FIFO word.
///
/// Each channel is scaled by 255 and truncated. Values outside `[0, 1]` are
/// not rejected; the float-to-byte cast saturates them.
pub fn rgb_color(r: f32, g: f32, b: f32) -> u32 {
    let r = (r * 255.0) as u8;
    let g = (g * 255.0) as u8;
    let b = (b * 255.0) as u8;
    (u32::from(g) << 24) | (u32::from(r) << 16) | (u32::from(b) << 8)
}

/// Word for a lit digit pixel.
pub fn on() -> u32 {
    let (r, g, b) = ON_INTENSITY;
    rgb_color(r, g, b)
}

/// Split a FIFO word back into `(r, g, b)` bytes.
pub const fn channels(word: u32) -> (u8, u8, u8) {
    ((word >> 16) as u8, (word >> 24) as u8, (word >> 8) as u8)
}
