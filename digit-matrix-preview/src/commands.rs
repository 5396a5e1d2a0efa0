// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations.

use std::fmt::Write;

use anyhow::{Context, Result};
use digit_matrix_common::bitmap::{self, to_grid};
use digit_matrix_common::color::{channels, rgb_color};
use digit_matrix_common::config::MATRIX_SIDE;
use digit_matrix_common::matrix::encode_digit;
use digit_matrix_common::{Button, Digit};

use crate::sim;

/// Draw `digit` as seen from the front of the board.
pub fn draw(digit: Digit) -> String {
    let mut out = String::new();
    for row in to_grid(bitmap::mask(digit)) {
        let cells: Vec<&str> = row.iter().map(|&lit| if lit { "#" } else { "." }).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Matrix words for `digit`, one matrix row of the stream per line.
pub fn word_listing(digit: Digit) -> String {
    let mut out = String::new();
    for (row, words) in encode_digit(digit).chunks(MATRIX_SIDE).enumerate() {
        let _ = write!(out, "  [{:2}]", row * MATRIX_SIDE);
        for word in words {
            let _ = write!(out, " 0x{:08X}", word);
        }
        out.push('\n');
    }
    out
}

/// Show a digit frame and its words.
pub fn show(value: u8) -> Result<()> {
    let digit = Digit::new(value).with_context(|| format!("{} is not a digit", value))?;

    println!("Digit {}:", value);
    println!();
    print!("{}", draw(digit));
    println!();
    println!("Stream words:");
    print!("{}", word_listing(digit));

    Ok(())
}

/// Print the packed color word.
pub fn color(r: f32, g: f32, b: f32) -> Result<()> {
    let word = rgb_color(r, g, b);
    let (r8, g8, b8) = channels(word);

    println!("0x{:08X}", word);
    println!("  G: {:3} (bits 31..24)", g8);
    println!("  R: {:3} (bits 23..16)", r8);
    println!("  B: {:3} (bits 15..8)", b8);

    Ok(())
}

/// Replay presses through the simulated main loop.
pub fn simulate(presses: &[Button], gap_ms: u64, draw_frames: bool) -> Result<()> {
    let report = sim::run(presses, gap_ms)?;

    println!("Presses:");
    for press in &report.presses {
        println!(
            "  {:>6} ms  {:?}  {}",
            press.at_ms,
            press.button,
            if press.accepted { "accepted" } else { "debounced" }
        );
    }

    println!();
    println!("Renders:");
    if report.renders.is_empty() {
        println!("  (none)");
    }
    for render in &report.renders {
        match render.digit {
            Some(digit) => {
                println!("  {:>6} ms  digit {}", render.at_ms, digit.value());
                if draw_frames {
                    for line in draw(digit).lines() {
                        println!("             {}", line);
                    }
                }
            }
            None => println!("  {:>6} ms  unknown frame", render.at_ms),
        }
    }

    println!();
    println!("Status LED transitions: {}", report.led_transitions);

    Ok(())
}
