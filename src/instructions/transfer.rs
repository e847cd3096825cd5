//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy one register into another and set Z and N
//! from the copied value. TXS copies X into the stack pointer and leaves the
//! flags alone.
//!
//! All transfers take 2 cycles: the opcode fetch and one internal cycle.

use crate::{MemoryBus, CPU};

pub(crate) fn execute_tax<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.x = cpu.a;
    cpu.set_load_flags(cpu.x);
}

pub(crate) fn execute_tay<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.y = cpu.a;
    cpu.set_load_flags(cpu.y);
}

pub(crate) fn execute_txa<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.a = cpu.x;
    cpu.set_load_flags(cpu.a);
}

pub(crate) fn execute_tya<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.a = cpu.y;
    cpu.set_load_flags(cpu.a);
}

pub(crate) fn execute_tsx<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.x = cpu.sp;
    cpu.set_load_flags(cpu.x);
}

/// TXS is the only transfer that does not touch the flags.
pub(crate) fn execute_txs<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    cpu.sp = cpu.x;
}
