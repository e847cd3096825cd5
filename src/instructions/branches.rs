//! # Branch Instructions
//!
//! This module implements the eight conditional branches:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset,
//! measured from the address of the next instruction.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::{MemoryBus, Mnemonic, CPU};

/// Executes a conditional branch.
pub(crate) fn execute_branch<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, mnemonic: Mnemonic) {
    let taken = match mnemonic {
        Mnemonic::Bcc => !cpu.flag_c,
        Mnemonic::Bcs => cpu.flag_c,
        Mnemonic::Beq => cpu.flag_z,
        Mnemonic::Bne => !cpu.flag_z,
        Mnemonic::Bmi => cpu.flag_n,
        Mnemonic::Bpl => !cpu.flag_n,
        Mnemonic::Bvs => cpu.flag_v,
        Mnemonic::Bvc => !cpu.flag_v,
        _ => false,
    };

    branch(cpu, bus, taken);
}

/// Reads the offset and, if `taken`, moves PC by it.
pub(crate) fn branch<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, taken: bool) {
    let offset = cpu.fetch(bus) as i8;

    if !taken {
        return;
    }

    let pc_after_instruction = cpu.pc;
    let target_pc = pc_after_instruction.wrapping_add_signed(offset as i16);

    // Add 1 cycle for branch taken
    bus.idle();

    // Add 1 more cycle if the high byte of PC changed
    if (pc_after_instruction & 0xFF00) != (target_pc & 0xFF00) {
        bus.idle();
    }

    cpu.pc = target_pc;
}
