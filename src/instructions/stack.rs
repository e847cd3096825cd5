//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack (3 cycles)
//! - PHP: Push Processor Status on Stack (3 cycles)
//! - PLA: Pull Accumulator from Stack (4 cycles)
//! - PLP: Pull Processor Status from Stack (4 cycles)
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::{MemoryBus, CPU};

/// Executes PHA (Push Accumulator).
///
/// Flags affected: None
pub(crate) fn execute_pha<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    let value = cpu.a;
    cpu.push(bus, value);
}

/// Executes PHP (Push Processor Status).
///
/// The pushed byte has the layout NV11DIZC: bits 4 (break) and 5 are set.
///
/// Flags affected: None
pub(crate) fn execute_php<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    let status = cpu.status();
    cpu.push(bus, status);
}

/// Executes PLA (Pull Accumulator).
///
/// Flags affected: Z, N
pub(crate) fn execute_pla<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    bus.idle();
    let value = cpu.pull(bus);
    cpu.a = value;
    cpu.set_load_flags(value);
}

/// Executes PLP (Pull Processor Status).
///
/// Flags affected: all six; bits 4 and 5 of the pulled byte are ignored.
pub(crate) fn execute_plp<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    bus.idle();
    let status = cpu.pull(bus);
    cpu.set_status(status);
}
