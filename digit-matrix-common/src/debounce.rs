// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Edge debouncing by minimum spacing between accepted edges.

use crate::config::DEBOUNCE_US;

/// Debounce state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// Next edge will be accepted.
    Idle,
    /// Edges are ignored until `window_us` has passed since `since_us`.
    Blackout { since_us: u64 },
}

/// Accepts an edge only if the previous accepted edge is at least one window old.
///
/// Ignored edges do not extend the window and are not counted.
#[derive(Debug, Clone)]
pub struct Debouncer {
    state: DebounceState,
    window_us: u64,
}

impl Debouncer {
    /// Starts blacked out from time 0, so edges in the first window after
    /// boot are ignored.
    pub const fn new(window_us: u64) -> Self {
        Self {
            state: DebounceState::Blackout { since_us: 0 },
            window_us,
        }
    }

    /// Current state as seen at `now_us`.
    pub fn state(&self, now_us: u64) -> DebounceState {
        match self.state {
            DebounceState::Blackout { since_us }
                if now_us.saturating_sub(since_us) < self.window_us =>
            {
                self.state
            }
            _ => DebounceState::Idle,
        }
    }

    /// Offer an edge seen at `now_us`. Returns `true` if it is accepted.
    pub fn accept(&mut self, now_us: u64) -> bool {
        match self.state(now_us) {
            DebounceState::Idle => {
                self.state = DebounceState::Blackout { since_us: now_us };
                true
            }
            DebounceState::Blackout { .. } => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_US)
    }
}
