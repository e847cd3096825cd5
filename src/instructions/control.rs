//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - BRK: Force Interrupt
//! - RTI: Return from Interrupt
//! - NOP: No Operation
//!
//! BRK is a software interrupt that:
//! 1. Skips a padding byte and pushes the resulting PC (high byte first)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::addressing::{combine, Access, AddressingMode};
use crate::cpu::IRQ_VECTOR;
use crate::{MemoryBus, CPU};

/// Executes JMP (Jump).
///
/// - Absolute (0x4C): 3 cycles
/// - Indirect (0x6C): 5 cycles, with the NMOS page-wrap bug: `JMP ($10FF)`
///   reads $10FF and $1000, not $1100.
///
/// Flags affected: None
pub(crate) fn execute_jmp<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    cpu.pc = cpu.effective_address(bus, mode, Access::Read);
}

/// Executes JSR (Jump to Subroutine), 6 cycles.
///
/// Pushes the address of the last byte of the JSR instruction, high byte
/// first. RTS adds one on return.
pub(crate) fn execute_jsr<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    let low = cpu.fetch(bus);
    bus.idle();

    // PC points at the high operand byte, which is the pushed return address
    let return_address = cpu.pc;
    cpu.push(bus, (return_address >> 8) as u8);
    cpu.push(bus, return_address as u8);

    let high = cpu.fetch(bus);
    cpu.pc = combine(low, high);
}

/// Executes RTS (Return from Subroutine), 6 cycles.
pub(crate) fn execute_rts<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    bus.idle();
    let low = cpu.pull(bus);
    let high = cpu.pull(bus);
    bus.idle();
    cpu.pc = combine(low, high).wrapping_add(1);
}

/// Executes BRK (Force Interrupt), 7 cycles.
///
/// Flags affected:
/// - B: set in the pushed status byte only
/// - I: Set to 1
pub(crate) fn execute_brk<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    // Padding byte after the opcode is read and skipped
    cpu.fetch(bus);

    let return_address = cpu.pc;
    cpu.push(bus, (return_address >> 8) as u8);
    cpu.push(bus, return_address as u8);

    let status = cpu.status();
    cpu.push(bus, status);
    cpu.flag_i = true;

    let low = bus.read(IRQ_VECTOR);
    let high = bus.read(IRQ_VECTOR + 1);
    cpu.pc = combine(low, high);
}

/// Executes RTI (Return from Interrupt), 6 cycles.
///
/// Pulls the status byte (bits 4 and 5 ignored), then PC. Unlike RTS, the
/// pulled PC is used as is.
pub(crate) fn execute_rti<B: MemoryBus>(cpu: &mut CPU, bus: &mut B) {
    bus.idle();
    bus.idle();
    let status = cpu.pull(bus);
    cpu.set_status(status);
    let low = cpu.pull(bus);
    let high = cpu.pull(bus);
    cpu.pc = combine(low, high);
}

/// Executes NOP, 2 cycles.
pub(crate) fn execute_nop<B: MemoryBus>(_cpu: &mut CPU, bus: &mut B) {
    bus.idle();
}
