//! # Increment and Decrement Instructions
//!
//! - INC, DEC: read-modify-write on memory (5-7 cycles)
//! - INX, INY, DEX, DEY: register forms (2 cycles)
//!
//! All of them wrap modulo 256 and set Z and N from the result.

use crate::addressing::{Access, AddressingMode};
use crate::{MemoryBus, CPU};

/// Executes INC (Increment Memory).
pub(crate) fn execute_inc<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    modify(cpu, bus, mode, |value| value.wrapping_add(1));
}

/// Executes DEC (Decrement Memory).
pub(crate) fn execute_dec<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    modify(cpu, bus, mode, |value| value.wrapping_sub(1));
}

pub(crate) fn execute_inx<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_load_flags(cpu.x);
}

pub(crate) fn execute_iny<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_load_flags(cpu.y);
}

pub(crate) fn execute_dex<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_load_flags(cpu.x);
}

pub(crate) fn execute_dey<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_load_flags(cpu.y);
}

/// Read, one internal cycle to modify, write back.
fn modify<B, F>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode, op: F)
where
    B: MemoryBus,
    F: FnOnce(u8) -> u8,
{
    let addr = cpu.effective_address(bus, mode, Access::Write);
    let value = bus.read(addr);
    bus.idle();
    let result = op(value);
    bus.write(addr, result);
    cpu.set_load_flags(result);
}
