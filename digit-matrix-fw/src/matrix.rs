// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! WS2812 matrix output on PIO0.
//!
//! One state machine shifts 24 bits of every FIFO word out MSB first, so a
//! `0xGGRRBB00` word goes out as G, R, B. Each bit takes 10 PIO cycles at
//! 800 kHz.

use digit_matrix_common::config::WS2812_BITS_PER_PIXEL;
use digit_matrix_common::matrix::clock_divider;
use rp2040_hal::pac;
use rp2040_hal::pio::{
    Buffers, PIOBuilder, PIOExt, PinDir, Running, ShiftDirection, StateMachine, Tx, PIO, SM0,
};

use crate::board::{InitError, MatrixPin};

pub type MatrixTx = Tx<(pac::PIO0, SM0)>;

/// Running matrix state machine and its transmit FIFO.
pub struct Matrix {
    pub tx: MatrixTx,
    _sm: StateMachine<(pac::PIO0, SM0), Running>,
    _pio: PIO<pac::PIO0>,
    _pin: MatrixPin,
}

pub fn init(
    pio0: pac::PIO0,
    resets: &mut pac::RESETS,
    pin: MatrixPin,
    sys_clk_hz: u32,
) -> Result<Matrix, InitError> {
    // T1 = 2, T2 = 5, T3 = 3 cycles
    let program = pio_proc::pio_asm!(
        ".side_set 1",
        ".wrap_target",
        "bitloop:",
        "    out x, 1        side 0 [2]",
        "    jmp !x do_zero  side 1 [1]",
        "do_one:",
        "    jmp bitloop     side 1 [4]",
        "do_zero:",
        "    nop             side 0 [4]",
        ".wrap",
    );

    let (mut pio, sm0, _, _, _) = pio0.split(resets);
    let installed = pio
        .install(&program.program)
        .map_err(|_| InitError::PioInstall)?;

    let (int, frac) = clock_divider(sys_clk_hz);
    let pin_id = pin.id().num;

    let (mut sm, _, tx) = PIOBuilder::from_installed_program(installed)
        .side_set_pin_base(pin_id)
        .out_shift_direction(ShiftDirection::Left)
        .autopull(true)
        .pull_threshold(WS2812_BITS_PER_PIXEL)
        .buffers(Buffers::OnlyTx)
        .clock_divisor_fixed_point(int, frac)
        .build(sm0);
    sm.set_pindirs([(pin_id, PinDir::Output)]);

    defmt::println!("Matrix on GPIO{}, clock divider {}+{}/256", pin_id, int, frac);

    Ok(Matrix {
        tx,
        _sm: sm.start(),
        _pio: pio,
        _pin: pin,
    })
}
