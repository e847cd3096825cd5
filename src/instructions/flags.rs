//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! Each touches exactly one flag.

use crate::{MemoryBus, CPU};

pub(crate) fn execute_clc<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.flag_c = false;
}

pub(crate) fn execute_sec<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.flag_c = true;
}

pub(crate) fn execute_cli<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.flag_i = false;
}

pub(crate) fn execute_sei<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.flag_i = true;
}

pub(crate) fn execute_clv<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.flag_v = false;
}

pub(crate) fn execute_cld<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.flag_d = false;
}

/// SED only records the flag; ADC and SBC stay binary.
pub(crate) fn execute_sed<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.flag_d = true;
}
