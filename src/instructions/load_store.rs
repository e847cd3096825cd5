//! # Load and Store Instructions
//!
//! This module implements the register load and store operations:
//! - LDA, LDX, LDY: Load a register from memory (sets Z and N)
//! - STA, STX, STY: Store a register to memory (no flags affected)
//!
//! Indexed stores always pay the page-crossing fix-up cycle, so `STA $nnnn,X`
//! takes 5 cycles whether or not the page changes.

use crate::addressing::{Access, AddressingMode};
use crate::{MemoryBus, CPU};

/// Executes LDA (Load Accumulator).
///
/// Cycles: 2-6 depending on addressing mode, +1 on page cross for
/// AbsoluteX, AbsoluteY and IndirectY.
pub(crate) fn execute_lda<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.read_operand(bus, mode);
    cpu.a = value;
    cpu.set_load_flags(value);
}

/// Executes LDX (Load X Register).
pub(crate) fn execute_ldx<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.read_operand(bus, mode);
    cpu.x = value;
    cpu.set_load_flags(value);
}

/// Executes LDY (Load Y Register).
pub(crate) fn execute_ldy<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.read_operand(bus, mode);
    cpu.y = value;
    cpu.set_load_flags(value);
}

/// Executes STA (Store Accumulator).
pub(crate) fn execute_sta<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.a;
    store(cpu, bus, mode, value);
}

/// Executes STX (Store X Register).
pub(crate) fn execute_stx<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.x;
    store(cpu, bus, mode, value);
}

/// Executes STY (Store Y Register).
pub(crate) fn execute_sty<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.y;
    store(cpu, bus, mode, value);
}

fn store<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode, value: u8) {
    let addr = cpu.effective_address(bus, mode, Access::Write);
    bus.write(addr, value);
}
