//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the effective-address arithmetic behind them.
//!
//! Each resolver spends cycles exactly as the hardware does: operand fetches,
//! pointer reads, internal index additions and the dummy read that fixes up a
//! page-crossing address all go through the [`MemoryBus`].

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// How an instruction uses its effective address.
///
/// Indexed modes only pay the page-crossing fix-up cycle on reads that cross a
/// page. Stores and read-modify-write instructions always pay it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Loads, ALU operands, compares.
    Read,
    /// Stores and read-modify-write instructions.
    Write,
}

/// Builds a 16-bit word from little-endian bytes.
///
/// ```
/// assert_eq!(lib6502::combine(0xAD, 0xDE), 0xDEAD);
/// ```
pub const fn combine(low: u8, high: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

fn page_crossed(base: u16, effective: u16) -> bool {
    (base & 0xFF00) != (effective & 0xFF00)
}

impl CPU {
    /// Reads the byte at PC and advances PC (1 cycle).
    pub(crate) fn fetch<B: MemoryBus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two (2 cycles).
    pub(crate) fn fetch_word<B: MemoryBus>(&mut self, bus: &mut B) -> u16 {
        let low = self.fetch(bus);
        let high = self.fetch(bus);
        combine(low, high)
    }

    /// Zero page,X: `(operand + X) & 0xFF`, 1 internal cycle.
    pub fn zero_page_x<B: MemoryBus>(&self, bus: &mut B, operand: u8) -> u16 {
        bus.idle();
        operand.wrapping_add(self.x) as u16
    }

    /// Zero page,Y: `(operand + Y) & 0xFF`, 1 internal cycle.
    pub fn zero_page_y<B: MemoryBus>(&self, bus: &mut B, operand: u8) -> u16 {
        bus.idle();
        operand.wrapping_add(self.y) as u16
    }

    /// Absolute,X: `base + X`.
    ///
    /// Costs one dummy read when the addition crosses a page, or always when
    /// `access` is [`Access::Write`].
    pub fn absolute_x<B: MemoryBus>(&self, bus: &mut B, base: u16, access: Access) -> u16 {
        Self::index_absolute(bus, base, self.x, access)
    }

    /// Absolute,Y: `base + Y`, same cycle rule as [`CPU::absolute_x`].
    pub fn absolute_y<B: MemoryBus>(&self, bus: &mut B, base: u16, access: Access) -> u16 {
        Self::index_absolute(bus, base, self.y, access)
    }

    /// Indexed indirect `(operand,X)`: 1 internal cycle for the index plus two
    /// zero-page pointer reads. The pointer wraps within zero page.
    pub fn indirect_x<B: MemoryBus>(&self, bus: &mut B, operand: u8) -> u16 {
        bus.idle();
        let pointer = operand.wrapping_add(self.x);
        let low = bus.read(pointer as u16);
        let high = bus.read(pointer.wrapping_add(1) as u16);
        combine(low, high)
    }

    /// Indirect indexed `(operand),Y`: two zero-page pointer reads, then `+ Y`
    /// with the same fix-up rule as the absolute indexed modes.
    pub fn indirect_y<B: MemoryBus>(&self, bus: &mut B, operand: u8, access: Access) -> u16 {
        let low = bus.read(operand as u16);
        let high = bus.read(operand.wrapping_add(1) as u16);
        Self::index_absolute(bus, combine(low, high), self.y, access)
    }

    fn index_absolute<B: MemoryBus>(bus: &mut B, base: u16, index: u8, access: Access) -> u16 {
        let effective = base.wrapping_add(index as u16);
        if page_crossed(base, effective) || access == Access::Write {
            // The hardware reads from the un-carried address while it fixes up
            // the high byte.
            bus.read((base & 0xFF00) | (effective & 0x00FF));
        }
        effective
    }

    /// Fetches the operand bytes for `mode` and returns the effective address.
    ///
    /// Not valid for Implicit, Accumulator, Immediate or Relative modes, which
    /// have no memory operand; those return the current PC untouched.
    pub(crate) fn effective_address<B: MemoryBus>(
        &mut self,
        bus: &mut B,
        mode: AddressingMode,
        access: Access,
    ) -> u16 {
        match mode {
            AddressingMode::ZeroPage => self.fetch(bus) as u16,
            AddressingMode::ZeroPageX => {
                let operand = self.fetch(bus);
                self.zero_page_x(bus, operand)
            }
            AddressingMode::ZeroPageY => {
                let operand = self.fetch(bus);
                self.zero_page_y(bus, operand)
            }
            AddressingMode::Absolute => self.fetch_word(bus),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(bus);
                self.absolute_x(bus, base, access)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(bus);
                self.absolute_y(bus, base, access)
            }
            AddressingMode::IndirectX => {
                let operand = self.fetch(bus);
                self.indirect_x(bus, operand)
            }
            AddressingMode::IndirectY => {
                let operand = self.fetch(bus);
                self.indirect_y(bus, operand, access)
            }
            AddressingMode::Indirect => {
                // JMP ($xxFF) takes its high byte from $xx00, not the next page
                let pointer = self.fetch_word(bus);
                let low = bus.read(pointer);
                let high = bus.read((pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF));
                combine(low, high)
            }
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => self.pc,
        }
    }

    /// Reads the operand value for a read instruction.
    pub(crate) fn read_operand<B: MemoryBus>(&mut self, bus: &mut B, mode: AddressingMode) -> u8 {
        match mode {
            AddressingMode::Immediate => self.fetch(bus),
            _ => {
                let addr = self.effective_address(bus, mode, Access::Read);
                bus.read(addr)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Memory;

    fn bus() -> Memory {
        let mut mem = Memory::new();
        mem.init(100);
        mem
    }

    #[test]
    fn test_combine() {
        assert_eq!(combine(0xAD, 0xDE), 0xDEAD);
        assert_eq!(combine(0xFF, 0x00), 0x00FF);
    }

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
        assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let mut mem = bus();
        let mut cpu = CPU::new();
        cpu.set_x(0x33);

        assert_eq!(cpu.zero_page_x(&mut mem, 0xE0), 0x0013);
        assert_eq!(mem.cycles(), 99);
    }

    #[test]
    fn test_absolute_x_same_page_is_free() {
        let mut mem = bus();
        let mut cpu = CPU::new();
        cpu.set_x(0x33);

        assert_eq!(cpu.absolute_x(&mut mem, 0xF044, Access::Read), 0xF077);
        assert_eq!(mem.cycles(), 100);
    }

    #[test]
    fn test_absolute_x_page_cross_costs_a_cycle() {
        let mut mem = bus();
        let mut cpu = CPU::new();
        cpu.set_x(0xF0);

        assert_eq!(cpu.absolute_x(&mut mem, 0x0043, Access::Read), 0x0133);
        assert_eq!(mem.cycles(), 99);
    }

    #[test]
    fn test_absolute_y_write_always_pays() {
        let mut mem = bus();
        let mut cpu = CPU::new();
        cpu.set_y(0x01);

        assert_eq!(cpu.absolute_y(&mut mem, 0x2000, Access::Write), 0x2001);
        assert_eq!(mem.cycles(), 99);
    }

    #[test]
    fn test_indirect_x() {
        let mut mem = bus();
        mem.write(0x42, 0xAD);
        mem.write(0x43, 0xDE);
        mem.set_cycles(100);

        let mut cpu = CPU::new();
        cpu.set_x(0x21);

        assert_eq!(cpu.indirect_x(&mut mem, 0x21), 0xDEAD);
        assert_eq!(mem.cycles(), 97);
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let mut mem = bus();
        mem.write(0x00FF, 0x34);
        mem.write(0x0000, 0x12);
        mem.set_cycles(100);

        let mut cpu = CPU::new();
        cpu.set_x(0x01);

        assert_eq!(cpu.indirect_x(&mut mem, 0xFE), 0x1234);
    }

    #[test]
    fn test_indirect_y_with_page_cross() {
        let mut mem = bus();
        mem.write(0xAA, 0xAB);
        mem.write(0xAB, 0xCD);
        mem.set_cycles(100);

        let mut cpu = CPU::new();
        cpu.set_y(0xF0);

        assert_eq!(cpu.indirect_y(&mut mem, 0xAA, Access::Read), 0xCE9B);
        // two pointer reads plus the fix-up read
        assert_eq!(mem.cycles(), 97);
    }

    #[test]
    fn test_jmp_indirect_page_wrap_bug() {
        let mut mem = bus();
        // JMP ($10FF) operand at 0x0200
        mem.write(0x0200, 0xFF);
        mem.write(0x0201, 0x10);
        mem.write(0x10FF, 0x34);
        mem.write(0x1000, 0x12);
        mem.write(0x1100, 0x99);

        let mut cpu = CPU::new();
        cpu.set_pc(0x0200);

        let target = cpu.effective_address(&mut mem, AddressingMode::Indirect, Access::Read);
        assert_eq!(target, 0x1234);
    }
}
