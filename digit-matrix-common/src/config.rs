// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Compile-time configuration shared by the firmware and host tools.

/// Minimum time between two accepted edges on the same button.
pub const DEBOUNCE_US: u64 = 200_000; // 200ms

/// Status LED toggle period.
pub const BLINK_PERIOD_US: u64 = 200_000; // 200ms

/// Sleep at the end of every main-loop iteration.
pub const LOOP_PERIOD_MS: u32 = 100;

/// LEDs per matrix side.
pub const MATRIX_SIDE: usize = 5;

/// LEDs on the matrix.
pub const NUM_PIXELS: usize = MATRIX_SIDE * MATRIX_SIDE;

/// Red, green and blue intensities of a lit digit pixel (dim amber).
pub const ON_INTENSITY: (f32, f32, f32) = (0.3, 0.1, 0.0);

/// WS2812 data rate.
pub const WS2812_FREQ_HZ: u32 = 800_000;

/// PIO cycles spent on each WS2812 bit by the matrix program.
pub const WS2812_CYCLES_PER_BIT: u32 = 10;

/// Bits shifted out of every 32-bit FIFO word (G, R, B).
pub const WS2812_BITS_PER_PIXEL: u8 = 24;
