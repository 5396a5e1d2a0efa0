// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Main-loop scenarios run against a simulated board.

use core::convert::Infallible;

use digit_matrix_common::color;
use digit_matrix_common::matrix::{decode_frame, encode_digit};
use digit_matrix_common::service::{self, Service, ServiceContext};
use digit_matrix_common::services::{DigitService, StatusBlinkService};
use digit_matrix_common::{
    Board, Button, DeviceState, Digit, InterruptDispatcher, WordSink, LOOP_PERIOD_MS, NUM_PIXELS,
};
use embedded_hal::digital::{ErrorType, OutputPin};

#[derive(Default)]
struct MockLed {
    high: bool,
    toggles: Vec<u64>,
    now_us: u64,
}

impl ErrorType for MockLed {
    type Error = Infallible;
}

impl OutputPin for MockLed {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        self.toggles.push(self.now_us);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        self.toggles.push(self.now_us);
        Ok(())
    }
}

#[derive(Default)]
struct MockMatrix {
    words: Vec<u32>,
}

impl WordSink for MockMatrix {
    fn write_word(&mut self, word: u32) {
        self.words.push(word);
    }
}

impl MockMatrix {
    fn frames(&self) -> Vec<Option<Digit>> {
        self.words.chunks(NUM_PIXELS).map(decode_frame).collect()
    }
}

#[derive(Default)]
struct MockBoard {
    now_us: u64,
    led: MockLed,
    matrix: MockMatrix,
}

impl MockBoard {
    fn advance_ms(&mut self, ms: u64) {
        self.now_us += ms * 1_000;
        self.led.now_us = self.now_us;
    }
}

impl Board for MockBoard {
    type StatusLed = MockLed;
    type Matrix = MockMatrix;

    fn now_us(&self) -> u64 {
        self.now_us
    }

    fn status_led(&mut self) -> &mut MockLed {
        &mut self.led
    }

    fn matrix(&mut self) -> &mut MockMatrix {
        &mut self.matrix
    }
}

/// One loop pass followed by the loop sleep.
fn iterate(board: &mut MockBoard, device: &DeviceState, services: &[&dyn Service<MockBoard>]) {
    let mut ctx = ServiceContext {
        peripherals: &mut *board,
        device,
    };
    service::run_once(services, &mut ctx);
    board.advance_ms(LOOP_PERIOD_MS as u64);
}

#[test]
fn test_button_a_from_zero_shows_one() {
    let device = DeviceState::new();
    let mut dispatcher = InterruptDispatcher::new(&device);
    let digits = DigitService::new();
    let mut board = MockBoard::default();
    board.advance_ms(1_000);

    assert!(dispatcher.on_falling_edge(Button::A, board.now_us));
    iterate(&mut board, &device, &[&digits]);

    assert_eq!(digits.digit(), Digit::new(1).unwrap());
    assert_eq!(board.matrix.frames(), vec![Digit::new(1)]);
    assert!(!device.button_a.is_raised());
}

#[test]
fn test_button_b_from_zero_shows_nine() {
    let device = DeviceState::new();
    let mut dispatcher = InterruptDispatcher::new(&device);
    let digits = DigitService::new();
    let mut board = MockBoard::default();
    board.advance_ms(1_000);

    assert!(dispatcher.on_falling_edge(Button::B, board.now_us));
    iterate(&mut board, &device, &[&digits]);

    assert_eq!(digits.digit(), Digit::NINE);
    assert_eq!(board.matrix.frames(), vec![Some(Digit::NINE)]);
}

#[test]
fn test_both_flags_render_twice() {
    let device = DeviceState::new();
    let digits = DigitService::starting_at(Digit::new(4).unwrap());
    let mut board = MockBoard::default();

    device.button_a.raise();
    device.button_b.raise();
    iterate(&mut board, &device, &[&digits]);

    assert_eq!(digits.digit(), Digit::new(4).unwrap());
    assert_eq!(
        board.matrix.frames(),
        vec![Digit::new(5), Digit::new(4)]
    );
}

#[test]
fn test_no_press_no_render() {
    let device = DeviceState::new();
    let digits = DigitService::new();
    let mut board = MockBoard::default();

    for _ in 0..20 {
        iterate(&mut board, &device, &[&digits]);
    }

    assert!(board.matrix.words.is_empty());
    assert_eq!(digits.digit(), Digit::ZERO);
}

#[test]
fn test_press_while_pending_is_dropped() {
    let device = DeviceState::new();
    let mut dispatcher = InterruptDispatcher::new(&device);
    let digits = DigitService::new();
    let mut board = MockBoard::default();

    // Two accepted edges before the loop gets to run: one press is lost.
    assert!(dispatcher.on_falling_edge(Button::A, 1_000_000));
    assert!(dispatcher.on_falling_edge(Button::A, 1_300_000));
    iterate(&mut board, &device, &[&digits]);

    assert_eq!(digits.digit().value(), 1);
    assert_eq!(board.matrix.frames().len(), 1);
}

#[test]
fn test_render_zero_word_layout() {
    let device = DeviceState::new();
    let digits = DigitService::starting_at(Digit::new(9).unwrap());
    let mut board = MockBoard::default();

    device.button_a.raise();
    iterate(&mut board, &device, &[&digits]);

    let words = &board.matrix.words;
    assert_eq!(words.len(), NUM_PIXELS);
    let lit = [1, 2, 3, 6, 8, 11, 13, 16, 18, 21, 22, 23];
    for (i, &word) in words.iter().enumerate() {
        if lit.contains(&i) {
            assert_eq!(word, color::on(), "position {}", i);
        } else {
            assert_eq!(word, 0x0000_0000, "position {}", i);
        }
    }
    assert_eq!(words[..], encode_digit(Digit::ZERO)[..]);
}

#[test]
fn test_blink_period() {
    let device = DeviceState::new();
    let blink = StatusBlinkService::new();
    let mut board = MockBoard::default();

    for _ in 0..50 {
        iterate(&mut board, &device, &[&blink]);
    }

    let toggles = &board.led.toggles;
    assert_eq!(toggles.first(), Some(&200_000));
    for pair in toggles.windows(2) {
        let gap = pair[1] - pair[0];
        assert!((200_000..=300_000).contains(&gap), "gap {}", gap);
    }
    // At most two toggles in any 200ms window
    for triple in toggles.windows(3) {
        assert!(triple[2] - triple[0] >= 200_000);
    }
}

#[test]
fn test_blink_not_starved_by_buttons() {
    let device = DeviceState::new();
    let blink = StatusBlinkService::new();
    let digits = DigitService::new();
    let mut board = MockBoard::default();

    for _ in 0..10 {
        device.button_a.raise();
        device.button_b.raise();
        iterate(&mut board, &device, &[&blink, &digits]);
    }

    assert_eq!(board.matrix.frames().len(), 20);
    assert_eq!(board.led.toggles, vec![200_000, 400_000, 600_000, 800_000]);
    assert!(!board.led.high);
    assert!(!blink.is_on());
}

#[test]
fn test_full_loop_counts_up_and_down() {
    let device = DeviceState::new();
    let mut dispatcher = InterruptDispatcher::new(&device);
    let blink = StatusBlinkService::new();
    let digits = DigitService::new();
    let services: [&dyn Service<MockBoard>; 2] = [&blink, &digits];
    let mut board = MockBoard::default();

    let presses = [Button::A, Button::A, Button::A, Button::B];
    for button in presses {
        board.advance_ms(250);
        dispatcher.on_falling_edge(button, board.now_us);
        iterate(&mut board, &device, &services);
    }

    let shown: Vec<u8> = board
        .matrix
        .frames()
        .into_iter()
        .map(|d| d.map(u8::from).unwrap_or(255))
        .collect();
    assert_eq!(shown, vec![1, 2, 3, 2]);
}
