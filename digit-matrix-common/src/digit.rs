// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! The displayed digit.

/// A decimal digit that wraps around on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);
    pub const NINE: Self = Self(9);

    /// Returns `None` for values above 9.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Next digit, 9 wraps to 0.
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % 10)
    }

    /// Previous digit, 0 wraps to 9.
    pub const fn prev(self) -> Self {
        if self.0 == 0 {
            Self::NINE
        } else {
            Self(self.0 - 1)
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}
