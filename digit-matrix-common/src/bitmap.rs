// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Digit bitmaps for the 5x5 matrix.
//!
//! Masks are stored in stream order: entry `i` is the `i`-th LED on the WS2812
//! chain. The chain starts at the bottom-right corner and snakes upwards, so
//! drawing a mask on a grid goes through [`stream_index`].

use crate::config::{MATRIX_SIDE, NUM_PIXELS};
use crate::digit::Digit;

/// On/off state of every LED of one frame, in stream order.
pub type Mask = [bool; NUM_PIXELS];

const X: bool = true;
const O: bool = false;

/// Frame masks indexed by digit value.
#[rustfmt::skip]
pub static DIGIT_MASKS: [Mask; 10] = [
    [O, X, X, X, O,  O, X, O, X, O,  O, X, O, X, O,  O, X, O, X, O,  O, X, X, X, O], // 0
    [O, O, X, O, O,  O, O, X, O, O,  O, O, X, O, O,  O, O, X, O, O,  O, O, X, X, O], // 1
    [O, X, X, X, O,  O, X, O, O, O,  O, O, X, O, O,  O, O, O, X, O,  O, X, X, X, O], // 2
    [O, X, X, X, O,  O, O, O, X, O,  O, X, X, X, O,  O, O, O, X, O,  O, X, X, X, O], // 3
    [O, X, O, O, O,  O, O, O, X, O,  O, X, X, X, O,  O, X, O, X, O,  O, X, O, X, O], // 4
    [O, X, X, X, O,  O, O, O, X, O,  O, X, X, X, O,  O, X, O, O, O,  O, X, X, X, O], // 5
    [O, X, X, X, O,  O, X, O, X, O,  O, X, X, X, O,  O, X, O, O, O,  O, O, X, O, O], // 6
    [O, X, O, O, O,  O, O, O, X, O,  O, X, O, O, O,  O, O, O, X, O,  O, X, X, X, O], // 7
    [O, X, X, X, O,  O, X, O, X, O,  O, X, X, X, O,  O, X, O, X, O,  O, X, X, X, O], // 8
    [O, O, X, O, O,  O, O, O, X, O,  O, X, X, X, O,  O, X, O, X, O,  O, X, X, X, O], // 9
];

/// Mask for `digit`.
pub fn mask(digit: Digit) -> &'static Mask {
    &DIGIT_MASKS[digit.value() as usize]
}

/// Stream index of the LED at `row` (0 = top) and `col` (0 = left).
///
/// Rows are counted from the bottom on the chain; even ones run right to
/// left, odd ones left to right.
pub const fn stream_index(row: usize, col: usize) -> usize {
    let from_bottom = MATRIX_SIDE - 1 - row;
    let offset = if from_bottom % 2 == 0 {
        MATRIX_SIDE - 1 - col
    } else {
        col
    };
    from_bottom * MATRIX_SIDE + offset
}

/// Rearrange a stream-order mask into rows as seen from the front, top row first.
pub fn to_grid(mask: &Mask) -> [[bool; MATRIX_SIDE]; MATRIX_SIDE] {
    let mut grid = [[false; MATRIX_SIDE]; MATRIX_SIDE];
    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            *cell = mask[stream_index(row, col)];
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(digit: u8) -> [[bool; MATRIX_SIDE]; MATRIX_SIDE] {
        to_grid(mask(Digit::new(digit).unwrap()))
    }

    #[test]
    fn test_stream_index_corners() {
        assert_eq!(stream_index(4, 4), 0);
        assert_eq!(stream_index(4, 0), 4);
        assert_eq!(stream_index(3, 0), 5);
        assert_eq!(stream_index(0, 4), 20);
        assert_eq!(stream_index(0, 0), 24);
    }

    #[test]
    fn test_stream_index_is_a_permutation() {
        let mut seen = [false; NUM_PIXELS];
        for row in 0..MATRIX_SIDE {
            for col in 0..MATRIX_SIDE {
                let idx = stream_index(row, col);
                assert!(!seen[idx]);
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_one_has_flag_on_the_left() {
        let grid = rows(1);
        assert_eq!(grid[0], [O, X, X, O, O]);
        for row in &grid[1..] {
            assert_eq!(*row, [O, O, X, O, O]);
        }
    }

    #[test]
    fn test_seven_reads_upright() {
        let grid = rows(7);
        assert_eq!(grid[0], [O, X, X, X, O]);
        for row in &grid[1..] {
            assert_eq!(*row, [O, O, O, X, O]);
        }
    }

    #[test]
    fn test_two_reads_upright() {
        let grid = rows(2);
        assert_eq!(grid[0], [O, X, X, X, O]);
        assert_eq!(grid[1], [O, O, O, X, O]);
        assert_eq!(grid[2], [O, O, X, O, O]);
        assert_eq!(grid[3], [O, X, O, O, O]);
        assert_eq!(grid[4], [O, X, X, X, O]);
    }

    #[test]
    fn test_outer_columns_always_dark() {
        for digit in 0..10 {
            for row in rows(digit) {
                assert!(!row[0] && !row[MATRIX_SIDE - 1], "digit {}", digit);
            }
        }
    }
}
