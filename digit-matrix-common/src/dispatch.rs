// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Routing of button edges to their debouncers.

use crate::debounce::Debouncer;
use crate::state::{Button, DeviceState};

/// Interrupt-side handler for falling edges on the button lines.
///
/// Owns the per-button debouncers and only ever raises flags in the shared
/// [`DeviceState`]. It does no I/O so it is safe to call from the GPIO
/// interrupt.
pub struct InterruptDispatcher<'a> {
    state: &'a DeviceState,
    button_a: Debouncer,
    button_b: Debouncer,
}

impl<'a> InterruptDispatcher<'a> {
    pub fn new(state: &'a DeviceState) -> Self {
        Self {
            state,
            button_a: Debouncer::default(),
            button_b: Debouncer::default(),
        }
    }

    /// Handle a falling edge on `button` seen at `now_us`.
    ///
    /// Returns `true` if the edge got past the debouncer and the flag was raised.
    pub fn on_falling_edge(&mut self, button: Button, now_us: u64) -> bool {
        let debouncer = match button {
            Button::A => &mut self.button_a,
            Button::B => &mut self.button_b,
        };

        if !debouncer.accept(now_us) {
            return false;
        }

        self.state.flag(button).raise();
        true
    }
}
