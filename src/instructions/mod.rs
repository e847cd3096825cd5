//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all documented 6502 instructions,
//! organized by category. Each instruction is a standalone function taking the
//! CPU, the bus and (where it matters) the addressing mode from the opcode table.
//!
//! By the time a handler runs, the opcode byte has been fetched and PC points at
//! the first operand byte. Handlers spend every remaining cycle of the
//! instruction on the bus themselves.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{MemoryBus, Mnemonic, OpcodeMetadata, CPU};

/// Runs the handler for a decoded opcode.
pub(crate) fn execute<B: MemoryBus>(cpu: &mut CPU, bus: &mut B, metadata: OpcodeMetadata) {
    let mode = metadata.addressing_mode;

    match metadata.mnemonic {
        Mnemonic::Lda => load_store::execute_lda(cpu, bus, mode),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, bus, mode),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, bus, mode),
        Mnemonic::Sta => load_store::execute_sta(cpu, bus, mode),
        Mnemonic::Stx => load_store::execute_stx(cpu, bus, mode),
        Mnemonic::Sty => load_store::execute_sty(cpu, bus, mode),

        Mnemonic::Tax => transfer::execute_tax(cpu, bus),
        Mnemonic::Tay => transfer::execute_tay(cpu, bus),
        Mnemonic::Txa => transfer::execute_txa(cpu, bus),
        Mnemonic::Tya => transfer::execute_tya(cpu, bus),
        Mnemonic::Tsx => transfer::execute_tsx(cpu, bus),
        Mnemonic::Txs => transfer::execute_txs(cpu, bus),

        Mnemonic::Pha => stack::execute_pha(cpu, bus),
        Mnemonic::Php => stack::execute_php(cpu, bus),
        Mnemonic::Pla => stack::execute_pla(cpu, bus),
        Mnemonic::Plp => stack::execute_plp(cpu, bus),

        Mnemonic::And => alu::execute_and(cpu, bus, mode),
        Mnemonic::Eor => alu::execute_eor(cpu, bus, mode),
        Mnemonic::Ora => alu::execute_ora(cpu, bus, mode),
        Mnemonic::Bit => alu::execute_bit(cpu, bus, mode),
        Mnemonic::Adc => alu::execute_adc(cpu, bus, mode),
        Mnemonic::Sbc => alu::execute_sbc(cpu, bus, mode),
        Mnemonic::Cmp => alu::execute_cmp(cpu, bus, mode),
        Mnemonic::Cpx => alu::execute_cpx(cpu, bus, mode),
        Mnemonic::Cpy => alu::execute_cpy(cpu, bus, mode),

        Mnemonic::Inc => inc_dec::execute_inc(cpu, bus, mode),
        Mnemonic::Dec => inc_dec::execute_dec(cpu, bus, mode),
        Mnemonic::Inx => inc_dec::execute_inx(cpu, bus),
        Mnemonic::Iny => inc_dec::execute_iny(cpu, bus),
        Mnemonic::Dex => inc_dec::execute_dex(cpu, bus),
        Mnemonic::Dey => inc_dec::execute_dey(cpu, bus),

        Mnemonic::Asl => shifts::execute_asl(cpu, bus, mode),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, bus, mode),
        Mnemonic::Rol => shifts::execute_rol(cpu, bus, mode),
        Mnemonic::Ror => shifts::execute_ror(cpu, bus, mode),

        Mnemonic::Jmp => control::execute_jmp(cpu, bus, mode),
        Mnemonic::Jsr => control::execute_jsr(cpu, bus),
        Mnemonic::Rts => control::execute_rts(cpu, bus),
        Mnemonic::Brk => control::execute_brk(cpu, bus),
        Mnemonic::Rti => control::execute_rti(cpu, bus),
        Mnemonic::Nop => control::execute_nop(cpu, bus),

        Mnemonic::Bcc
        | Mnemonic::Bcs
        | Mnemonic::Beq
        | Mnemonic::Bne
        | Mnemonic::Bmi
        | Mnemonic::Bpl
        | Mnemonic::Bvs
        | Mnemonic::Bvc => branches::execute_branch(cpu, bus, metadata.mnemonic),

        Mnemonic::Clc => flags::execute_clc(cpu, bus),
        Mnemonic::Cld => flags::execute_cld(cpu, bus),
        Mnemonic::Cli => flags::execute_cli(cpu, bus),
        Mnemonic::Clv => flags::execute_clv(cpu, bus),
        Mnemonic::Sec => flags::execute_sec(cpu, bus),
        Mnemonic::Sed => flags::execute_sed(cpu, bus),
        Mnemonic::Sei => flags::execute_sei(cpu, bus),
    }
}
