// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! State shared between the GPIO interrupt and the main loop.
//!
//! Each flag has one writer per direction: the interrupt dispatcher only
//! raises, the main loop only clears. Plain atomic load/store is enough for
//! that and is all a Cortex-M0+ offers.

use core::sync::atomic::{AtomicBool, Ordering};

/// Push-buttons on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Counts up
    A,
    /// Counts down
    B,
}

/// A latched, not yet handled button press.
///
/// Holds at most one press; raising an already raised flag drops the press.
pub struct PressFlag(AtomicBool);

impl PressFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Latch a press. Interrupt context only.
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clear the flag, returning whether it was raised. Main loop only.
    pub fn take(&self) -> bool {
        if self.0.load(Ordering::Acquire) {
            self.0.store(false, Ordering::Release);
            true
        } else {
            false
        }
    }
}

impl Default for PressFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Pending presses for both buttons.
pub struct DeviceState {
    pub button_a: PressFlag,
    pub button_b: PressFlag,
}

impl DeviceState {
    pub const fn new() -> Self {
        Self {
            button_a: PressFlag::new(),
            button_b: PressFlag::new(),
        }
    }

    pub fn flag(&self, button: Button) -> &PressFlag {
        match button {
            Button::A => &self.button_a,
            Button::B => &self.button_b,
        }
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears() {
        let flag = PressFlag::new();
        assert!(!flag.take());
        flag.raise();
        assert!(flag.is_raised());
        assert!(flag.take());
        assert!(!flag.is_raised());
        assert!(!flag.take());
    }

    #[test]
    fn test_second_raise_is_dropped() {
        let flag = PressFlag::new();
        flag.raise();
        flag.raise();
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn test_flags_are_independent() {
        let state = DeviceState::new();
        state.flag(Button::B).raise();
        assert!(!state.button_a.is_raised());
        assert!(state.button_b.is_raised());
    }
}
