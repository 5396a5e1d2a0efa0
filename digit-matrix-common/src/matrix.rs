// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Rendering digits onto the WS2812 word stream.

use crate::bitmap;
use crate::color;
use crate::config::{NUM_PIXELS, WS2812_CYCLES_PER_BIT, WS2812_FREQ_HZ};
use crate::digit::Digit;

/// Destination for matrix words.
///
/// `write_word` blocks until the word has been accepted.
pub trait WordSink {
    fn write_word(&mut self, word: u32);
}

impl<S: WordSink + ?Sized> WordSink for &mut S {
    fn write_word(&mut self, word: u32) {
        (**self).write_word(word);
    }
}

#[cfg(feature = "std")]
impl WordSink for Vec<u32> {
    fn write_word(&mut self, word: u32) {
        self.push(word);
    }
}

/// Words for one frame showing `digit`, in stream order.
pub fn encode_digit(digit: Digit) -> [u32; NUM_PIXELS] {
    let on = color::on();
    let mut frame = [color::OFF; NUM_PIXELS];
    for (word, &lit) in frame.iter_mut().zip(bitmap::mask(digit)) {
        if lit {
            *word = on;
        }
    }
    frame
}

/// Find the digit whose frame is exactly `frame`.
pub fn decode_frame(frame: &[u32]) -> Option<Digit> {
    (0..10)
        .filter_map(Digit::new)
        .find(|&digit| encode_digit(digit)[..] == *frame)
}

/// Push the frame for `digit` to the matrix.
pub fn render_digit<S: WordSink + ?Sized>(sink: &mut S, digit: Digit) {
    for word in encode_digit(digit) {
        sink.write_word(word);
    }
}

/// PIO clock divider for the WS2812 program as `(integer, 1/256 fraction)`.
///
/// divider = sys_clk / (bit_rate * cycles_per_bit)
pub fn clock_divider(sys_clk_hz: u32) -> (u16, u8) {
    let cycles_hz = (WS2812_FREQ_HZ * WS2812_CYCLES_PER_BIT) as u64;
    let divider_x256 = (sys_clk_hz as u64 * 256) / cycles_hz;

    let int_part = (divider_x256 / 256).min(0xFFFF) as u16;
    let frac_part = (divider_x256 % 256) as u8;
    (int_part, frac_part)
}
