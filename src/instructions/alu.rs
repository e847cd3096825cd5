//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Register comparisons
//! - BIT: Bit test
//!
//! Arithmetic is always binary. The decimal flag is stored but never consulted.

use crate::addressing::AddressingMode;
use crate::cpu::status;
use crate::{MemoryBus, CPU};

/// Executes AND (Logical AND). Flags affected: Z, N.
pub(crate) fn execute_and<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.read_operand(bus, mode);
    cpu.a &= value;
    cpu.set_load_flags(cpu.a);
}

/// Executes EOR (Exclusive OR). Flags affected: Z, N.
pub(crate) fn execute_eor<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.read_operand(bus, mode);
    cpu.a ^= value;
    cpu.set_load_flags(cpu.a);
}

/// Executes ORA (Logical Inclusive OR). Flags affected: Z, N.
pub(crate) fn execute_ora<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.read_operand(bus, mode);
    cpu.a |= value;
    cpu.set_load_flags(cpu.a);
}

/// Executes BIT (Bit Test).
///
/// - Z: set if `A & M` is zero
/// - V: bit 6 of M
/// - N: bit 7 of M
///
/// The accumulator is not modified.
pub(crate) fn execute_bit<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.read_operand(bus, mode);
    cpu.flag_z = cpu.a & value == 0;
    cpu.flag_v = value & status::OVERFLOW != 0;
    cpu.flag_n = value & status::NEGATIVE != 0;
}

/// Executes ADC (Add with Carry). Flags affected: C, Z, V, N.
pub(crate) fn execute_adc<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.read_operand(bus, mode);
    add_with_carry(cpu, value);
}

/// Executes SBC (Subtract with Carry). Flags affected: C, Z, V, N.
///
/// `A - M - (1 - C)` equals `A + (255 - M) + C` in 8 bits, so SBC is ADC of
/// the inverted operand. Carry ends up set when no borrow was needed.
pub(crate) fn execute_sbc<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.read_operand(bus, mode);
    add_with_carry(cpu, !value);
}

/// Executes CMP (Compare Accumulator). Flags affected: C, Z, N.
pub(crate) fn execute_cmp<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.read_operand(bus, mode);
    let register = cpu.a;
    compare(cpu, register, value);
}

/// Executes CPX (Compare X Register). Flags affected: C, Z, N.
pub(crate) fn execute_cpx<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.read_operand(bus, mode);
    let register = cpu.x;
    compare(cpu, register, value);
}

/// Executes CPY (Compare Y Register). Flags affected: C, Z, N.
pub(crate) fn execute_cpy<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    let value = cpu.read_operand(bus, mode);
    let register = cpu.y;
    compare(cpu, register, value);
}

/// Adds `value` and the carry flag to the accumulator.
///
/// Overflow is set when both inputs share a sign that the result does not:
/// `(A ^ R) & (M ^ R) & 0x80`.
pub(crate) fn add_with_carry(cpu: &mut CPU, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.flag_c as u16;
    let result = sum as u8;

    cpu.flag_c = sum > 0xFF;
    cpu.flag_v = (a ^ result) & (value ^ result) & 0x80 != 0;
    cpu.a = result;
    cpu.set_load_flags(result);
}

/// Sets flags as if `register - value` were computed.
///
/// Carry is set when `register >= value` (unsigned), i.e. no borrow.
pub(crate) fn compare(cpu: &mut CPU, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.set_load_flags(result);
    cpu.flag_c = register >= value;
}
