// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! GPIO bank 0 interrupt: button edges to press flags.
//!
//! The handler only raises flags through the dispatcher; rendering stays in
//! the main loop.

use core::cell::RefCell;
use critical_section::Mutex;
use digit_matrix_common::{Button, DeviceState, InterruptDispatcher};
use rp2040_hal::gpio::Interrupt::EdgeLow;
use rp2040_hal::gpio::{Function, Pin, PinId, PullType};
use rp2040_hal::pac::{self, interrupt};
use rp2040_hal::Timer;

use crate::board::Buttons;

/// Everything the interrupt handler owns.
pub struct IrqContext {
    buttons: Buttons,
    timer: Timer,
    dispatcher: InterruptDispatcher<'static>,
}

impl IrqContext {
    pub fn new(buttons: Buttons, timer: Timer, device: &'static DeviceState) -> Self {
        Self {
            buttons,
            timer,
            dispatcher: InterruptDispatcher::new(device),
        }
    }

    fn service(&mut self) {
        let now = self.timer.get_counter().ticks();

        if take_edge(&mut self.buttons.a) {
            self.on_edge(Button::A, now);
        }
        if take_edge(&mut self.buttons.b) {
            self.on_edge(Button::B, now);
        }
    }

    fn on_edge(&mut self, button: Button, now: u64) {
        if self.dispatcher.on_falling_edge(button, now) {
            defmt::debug!("Button {:?} pressed", button);
        } else {
            defmt::trace!("Button {:?} bounce ignored", button);
        }
    }
}

/// Check and acknowledge a latched falling edge on `pin`.
fn take_edge<I: PinId, F: Function, P: PullType>(pin: &mut Pin<I, F, P>) -> bool {
    let fired = pin.interrupt_status(EdgeLow);
    if fired {
        pin.clear_interrupt(EdgeLow);
    }
    fired
}

static IRQ_CONTEXT: Mutex<RefCell<Option<IrqContext>>> = Mutex::new(RefCell::new(None));

/// Arm falling-edge interrupts on both buttons and hand them to the handler.
pub fn install(ctx: IrqContext) {
    ctx.buttons.a.set_interrupt_enabled(EdgeLow, true);
    ctx.buttons.b.set_interrupt_enabled(EdgeLow, true);

    critical_section::with(|cs| IRQ_CONTEXT.borrow(cs).replace(Some(ctx)));

    // SAFETY: the handler only touches IRQ_CONTEXT and the atomic press flags
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }
}

#[interrupt]
fn IO_IRQ_BANK0() {
    static mut CONTEXT: Option<IrqContext> = None;

    if CONTEXT.is_none() {
        critical_section::with(|cs| *CONTEXT = IRQ_CONTEXT.borrow(cs).take());
    }

    if let Some(ctx) = CONTEXT {
        ctx.service();
    }
}
