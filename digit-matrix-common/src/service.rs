// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Generic service system for the polling main loop.

use crate::state::DeviceState;

/// Shared context passed to all services
pub struct ServiceContext<'a, P> {
    pub peripherals: &'a mut P,
    pub device: &'a DeviceState,
}

/// Trait for services that run in the main loop
pub trait Service<P> {
    /// Process this service's logic
    /// Uses interior mutability (Cell) for state changes
    fn process(&self, ctx: &mut ServiceContext<P>);
}

/// Run one main-loop pass: every service once, in order.
pub fn run_once<P>(services: &[&dyn Service<P>], ctx: &mut ServiceContext<P>) {
    for service in services {
        service.process(ctx);
    }
}
