// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

#![no_std]
#![no_main]

mod board;
mod irq;
mod matrix;

use defmt_rtt as _;
use panic_probe as _;

use cortex_m_rt::entry;
use digit_matrix_common::service::{self, Service, ServiceContext};
use digit_matrix_common::services::{DigitService, StatusBlinkService};
use digit_matrix_common::{DeviceState, LOOP_PERIOD_MS};
use embedded_hal::delay::DelayNs;

defmt::timestamp!("{=u64:us}", board::uptime_us());

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

/// Press flags, raised from `IO_IRQ_BANK0` and cleared by the main loop.
pub static DEVICE: DeviceState = DeviceState::new();

#[entry]
fn main() -> ! {
    defmt::println!("Digit matrix init");

    let (mut peripherals, buttons) = match board::init() {
        Ok(parts) => parts,
        Err(e) => {
            defmt::error!("Board init failed: {:?}", e);
            halt();
        }
    };

    irq::install(irq::IrqContext::new(buttons, peripherals.timer, &DEVICE));

    let blink = StatusBlinkService::new();
    let digits = DigitService::new();
    let services: [&dyn Service<board::Peripherals>; 2] = [&blink, &digits];
    let mut delay = peripherals.timer;

    defmt::println!("Entering main loop");

    loop {
        let mut ctx = ServiceContext {
            peripherals: &mut peripherals,
            device: &DEVICE,
        };
        service::run_once(&services, &mut ctx);
        delay.delay_ms(LOOP_PERIOD_MS);
    }
}

fn halt() -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
