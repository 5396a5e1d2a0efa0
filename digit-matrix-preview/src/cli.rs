// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use digit_matrix_common::Button;

use crate::commands;
use crate::sim::MAX_GAP_MS;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "digit-matrix-preview")]
#[command(about = "Preview frames and replay button presses for the digit matrix firmware")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Draw a digit and list its matrix words
    Show {
        /// Digit to draw (0-9)
        #[arg(value_name = "DIGIT", value_parser = clap::value_parser!(u8).range(0..=9))]
        digit: u8,
    },

    /// Pack intensities into a matrix color word
    Color {
        /// Red intensity (0.0-1.0)
        #[arg(value_name = "R", value_parser = parse_intensity)]
        r: f32,

        /// Green intensity (0.0-1.0)
        #[arg(value_name = "G", value_parser = parse_intensity)]
        g: f32,

        /// Blue intensity (0.0-1.0)
        #[arg(value_name = "B", value_parser = parse_intensity)]
        b: f32,
    },

    /// Replay a sequence of button presses through the main loop
    Simulate {
        /// Presses in order: `a` counts up, `b` counts down
        #[arg(value_name = "PRESSES", required = true, value_parser = parse_button)]
        presses: Vec<Button>,

        /// Time between consecutive presses in milliseconds
        #[arg(
            short,
            long,
            default_value = "300",
            value_parser = clap::value_parser!(u64).range(0..=MAX_GAP_MS)
        )]
        gap_ms: u64,

        /// Draw every rendered frame
        #[arg(short, long)]
        draw: bool,
    },
}

/// Parse a normalized intensity.
fn parse_intensity(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("invalid intensity: {e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("intensity {value} outside 0.0-1.0"))
    }
}

/// Parse a press token (`a` or `b`, any case).
fn parse_button(s: &str) -> Result<Button, String> {
    match s {
        "a" | "A" => Ok(Button::A),
        "b" | "B" => Ok(Button::B),
        _ => Err(format!("unknown button '{s}', expected 'a' or 'b'")),
    }
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Show { digit } => commands::show(digit),
        Commands::Color { r, g, b } => commands::color(r, g, b),
        Commands::Simulate {
            presses,
            gap_ms,
            draw,
        } => commands::simulate(&presses, gap_ms, draw),
    }
}
