// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Simulated board running the firmware services on a virtual clock.

use std::convert::Infallible;

use anyhow::{bail, Context, Result};
use digit_matrix_common::matrix::decode_frame;
use digit_matrix_common::service::{self, Service, ServiceContext};
use digit_matrix_common::services::{DigitService, StatusBlinkService};
use digit_matrix_common::{
    Board, Button, DeviceState, Digit, InterruptDispatcher, LOOP_PERIOD_MS, NUM_PIXELS,
};
use embedded_hal::digital::{ErrorType, OutputPin};

const LOOP_PERIOD_US: u64 = LOOP_PERIOD_MS as u64 * 1_000;

/// Longest accepted spacing between simulated presses.
pub const MAX_GAP_MS: u64 = 60_000;

/// Status LED that only counts its transitions.
#[derive(Default)]
pub struct SimLed {
    pub high: bool,
    pub transitions: usize,
}

impl ErrorType for SimLed {
    type Error = Infallible;
}

impl OutputPin for SimLed {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        self.transitions += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        self.transitions += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct SimBoard {
    pub now_us: u64,
    pub led: SimLed,
    pub matrix: Vec<u32>,
}

impl Board for SimBoard {
    type StatusLed = SimLed;
    type Matrix = Vec<u32>;

    fn now_us(&self) -> u64 {
        self.now_us
    }

    fn status_led(&mut self) -> &mut SimLed {
        &mut self.led
    }

    fn matrix(&mut self) -> &mut Vec<u32> {
        &mut self.matrix
    }
}

/// A press delivered to the interrupt dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressEvent {
    pub at_ms: u64,
    pub button: Button,
    pub accepted: bool,
}

/// A frame pushed to the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderEvent {
    pub at_ms: u64,
    pub digit: Option<Digit>,
}

#[derive(Debug, Default)]
pub struct Report {
    pub presses: Vec<PressEvent>,
    pub renders: Vec<RenderEvent>,
    pub led_transitions: usize,
}

/// Replay `presses`, one every `gap_ms` starting at `gap_ms`, through the
/// dispatcher and the main-loop services.
///
/// Edges are delivered at their own timestamp, before the loop pass that
/// follows them. The run ends one loop period after the last press.
pub fn run(presses: &[Button], gap_ms: u64) -> Result<Report> {
    if gap_ms > MAX_GAP_MS {
        bail!("gap of {gap_ms} ms exceeds {MAX_GAP_MS} ms");
    }

    let device = DeviceState::new();
    let mut dispatcher = InterruptDispatcher::new(&device);
    let blink = StatusBlinkService::new();
    let digits = DigitService::new();
    let services: [&dyn Service<SimBoard>; 2] = [&blink, &digits];
    let mut board = SimBoard::default();
    let mut report = Report::default();

    let gap_us = gap_ms * 1_000;
    let schedule = presses
        .iter()
        .enumerate()
        .map(|(i, &button)| {
            (i as u64 + 1)
                .checked_mul(gap_us)
                .map(|at| (at, button))
                .context("press schedule overflows the simulated clock")
        })
        .collect::<Result<Vec<(u64, Button)>>>()?;
    let end_us = schedule.last().map_or(0, |&(at, _)| at) + LOOP_PERIOD_US;

    let mut pending = schedule.iter().peekable();
    while board.now_us <= end_us {
        while let Some(&(at_us, button)) = pending.next_if(|&&(at, _)| at <= board.now_us) {
            report.presses.push(PressEvent {
                at_ms: at_us / 1_000,
                button,
                accepted: dispatcher.on_falling_edge(button, at_us),
            });
        }

        let written = board.matrix.len();
        let mut ctx = ServiceContext {
            peripherals: &mut board,
            device: &device,
        };
        service::run_once(&services, &mut ctx);

        let at_ms = board.now_us / 1_000;
        report.renders.extend(
            board.matrix[written..]
                .chunks(NUM_PIXELS)
                .map(|frame| RenderEvent {
                    at_ms,
                    digit: decode_frame(frame),
                }),
        );

        board.now_us += LOOP_PERIOD_US;
    }

    report.led_transitions = board.led.transitions;
    Ok(report)
}
