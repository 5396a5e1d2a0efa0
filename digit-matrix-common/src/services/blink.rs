// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Status LED blinking.

use crate::board::Board;
use crate::config::BLINK_PERIOD_US;
use crate::service::{Service, ServiceContext};
use core::cell::Cell;
use embedded_hal::digital::OutputPin;

/// LED state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    On { since_us: u64 },
    Off { since_us: u64 },
}

/// Service that toggles the status LED every period, based on elapsed time
pub struct StatusBlinkService {
    state: Cell<LedState>,
    period_us: u64,
}

impl StatusBlinkService {
    pub fn new() -> Self {
        Self {
            state: Cell::new(LedState::Off { since_us: 0 }),
            period_us: BLINK_PERIOD_US,
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self.state.get(), LedState::On { .. })
    }
}

impl Default for StatusBlinkService {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Board> Service<P> for StatusBlinkService {
    fn process(&self, ctx: &mut ServiceContext<P>) {
        let now = ctx.peripherals.now_us();
        let state = self.state.get();

        match state {
            LedState::On { since_us } => {
                if now.saturating_sub(since_us) >= self.period_us {
                    ctx.peripherals.status_led().set_low().ok();
                    self.state.set(LedState::Off { since_us: now });
                }
            }
            LedState::Off { since_us } => {
                if now.saturating_sub(since_us) >= self.period_us {
                    ctx.peripherals.status_led().set_high().ok();
                    self.state.set(LedState::On { since_us: now });
                }
            }
        }
    }
}
