//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! The carry flag receives the bit shifted out. Rotates feed the old carry
//! into the vacated bit. Z and N are set from the result.
//!
//! Accumulator forms take 2 cycles; memory forms are read-modify-write and
//! take 5-7 cycles.

use crate::addressing::{Access, AddressingMode};
use crate::{MemoryBus, CPU};

/// Executes ASL (Arithmetic Shift Left).
pub(crate) fn execute_asl<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    shift(cpu, bus, mode, |value, _| (value << 1, value & 0x80 != 0));
}

/// Executes LSR (Logical Shift Right). N always ends up clear.
pub(crate) fn execute_lsr<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    shift(cpu, bus, mode, |value, _| (value >> 1, value & 0x01 != 0));
}

/// Executes ROL (Rotate Left).
pub(crate) fn execute_rol<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    shift(cpu, bus, mode, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    });
}

/// Executes ROR (Rotate Right).
pub(crate) fn execute_ror<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode) {
    shift(cpu, bus, mode, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    });
}

/// Applies `op(value, carry_in) -> (result, carry_out)` to the accumulator or
/// to memory.
fn shift<B, F>(cpu: &mut CPU, bus: &mut B, mode: AddressingMode, op: F)
where
    B: MemoryBus,
    F: FnOnce(u8, bool) -> (u8, bool),
{
    let result = if mode == AddressingMode::Accumulator {
        bus.idle();
        let (result, carry) = op(cpu.a, cpu.flag_c);
        cpu.flag_c = carry;
        cpu.a = result;
        result
    } else {
        let addr = cpu.effective_address(bus, mode, Access::Write);
        let value = bus.read(addr);
        bus.idle();
        let (result, carry) = op(value, cpu.flag_c);
        cpu.flag_c = carry;
        bus.write(addr, result);
        result
    };

    cpu.set_load_flags(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Memory;

    #[test]
    fn test_rol_accumulator_feeds_old_carry() {
        let mut mem = Memory::new();
        mem.init(10);
        let mut cpu = CPU::new();
        cpu.set_a(0b1000_0001);
        cpu.set_flag_c(true);

        execute_rol(&mut cpu, &mut mem, AddressingMode::Accumulator);

        assert_eq!(cpu.a(), 0b0000_0011);
        assert!(cpu.flag_c());
        assert_eq!(mem.cycles(), 9);
    }

    #[test]
    fn test_ror_memory_writes_result() {
        let mut mem = Memory::new();
        mem.init(10);
        // operand byte at 0x0000 points to zero page 0x10
        mem.write(0x0000, 0x10);
        mem.write(0x0010, 0b0000_0010);
        mem.set_cycles(10);

        let mut cpu = CPU::new();
        cpu.set_flag_c(true);

        execute_ror(&mut cpu, &mut mem, AddressingMode::ZeroPage);

        assert_eq!(mem.image()[0x0010], 0b1000_0001);
        assert!(!cpu.flag_c());
        assert!(cpu.flag_n());
        // operand, read, modify, write
        assert_eq!(mem.cycles(), 6);
    }
}
