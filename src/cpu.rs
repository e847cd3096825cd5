//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, D, I, Z, C (individual bool fields)
//!
//! The CPU does not own memory or a cycle counter. Both belong to the session
//! and are lent to every call through a [`MemoryBus`].
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `execute()`: Execute until the bus reports the cycle budget exhausted

use crate::addressing::combine;
use crate::{decode, instructions, ExecutionError, MemoryBus};

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the little-endian BRK/IRQ vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Status register bit masks (NV-BDIZC).
pub mod status {
    pub const CARRY: u8 = 0b0000_0001;
    pub const ZERO: u8 = 0b0000_0010;
    pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;
    pub const DECIMAL: u8 = 0b0000_1000;
    /// Only exists in status bytes pushed by PHP and BRK.
    pub const BREAK: u8 = 0b0001_0000;
    /// Always reads as 1 when pushed.
    pub const UNUSED: u8 = 0b0010_0000;
    pub const OVERFLOW: u8 = 0b0100_0000;
    pub const NEGATIVE: u8 = 0b1000_0000;
}

/// 6502 CPU state.
///
/// The state is all zeros until [`CPU::reset`] runs.
///
/// # Examples
///
/// ```
/// use lib6502::{CPU, Memory};
///
/// let mut memory = Memory::new();
/// memory.init(100);
/// memory.fill(&[0xEA; 0x10000]);
/// memory[0xFFFC] = 0x00;
/// memory[0xFFFD] = 0x80;
///
/// let mut cpu = CPU::new();
/// cpu.reset(&mut memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Decimal mode flag (stored only; arithmetic is always binary)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow, clear on borrow)
    pub(crate) flag_c: bool,
}

impl CPU {
    /// Creates a CPU with every register and flag zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends the reset signal (7 cycles).
    ///
    /// Clears registers and flags, performs the three dummy stack reads that
    /// leave SP at 0xFD, and loads PC from the reset vector at 0xFFFC/0xFFFD.
    pub fn reset<B: MemoryBus>(&mut self, bus: &mut B) {
        *self = Self::default();
        bus.idle();
        bus.idle();

        for _ in 0..3 {
            bus.read(STACK_BASE | self.sp as u16);
            self.sp = self.sp.wrapping_sub(1);
        }

        let low = bus.read(RESET_VECTOR);
        let high = bus.read(RESET_VECTOR + 1);
        self.pc = combine(low, high);

        log::debug!("reset: pc={:04X} sp={:02X}", self.pc, self.sp);
    }

    /// Executes one instruction.
    ///
    /// Fetches the opcode at PC (1 cycle), decodes it through the opcode table
    /// and runs it. An undocumented opcode only costs the fetch and returns
    /// [`ExecutionError::IllegalOpcode`]; PC is left pointing past it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib6502::{CPU, Memory, MemoryBus};
    ///
    /// let mut memory = Memory::new();
    /// memory.init(100);
    /// memory.fill(&[0xA9, 0x42]); // LDA #$42
    ///
    /// let mut cpu = CPU::new();
    /// cpu.step(&mut memory).unwrap();
    ///
    /// assert_eq!(cpu.a(), 0x42);
    /// assert_eq!(memory.remaining_cycles(), 98);
    /// ```
    pub fn step<B: MemoryBus>(&mut self, bus: &mut B) -> Result<(), ExecutionError> {
        let address = self.pc;
        let opcode = self.fetch(bus);

        let Some(metadata) = decode(opcode) else {
            return Err(ExecutionError::IllegalOpcode { opcode, address });
        };

        log::trace!(
            "{:04X}  {:02X}  {} {:?}",
            address,
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode
        );

        instructions::execute(self, bus, metadata);
        Ok(())
    }

    /// Executes instructions while the bus has cycles left in its budget.
    ///
    /// The budget is only checked between instructions, so it usually ends a
    /// few cycles below zero. Undocumented opcodes are skipped. Returns the
    /// number of instructions fetched.
    pub fn execute<B: MemoryBus>(&mut self, bus: &mut B) -> u64 {
        let mut instructions = 0;

        while bus.remaining_cycles() > 0 {
            if let Err(err) = self.step(bus) {
                log::debug!("skipping: {}", err);
            }
            instructions += 1;
        }

        instructions
    }

    /// Pushes a byte: write at 0x0100 | SP, then decrement SP (1 cycle).
    pub(crate) fn push<B: MemoryBus>(&mut self, bus: &mut B, value: u8) {
        bus.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte: increment SP, then read at 0x0100 | SP (1 cycle).
    pub(crate) fn pull<B: MemoryBus>(&mut self, bus: &mut B) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_BASE | self.sp as u16)
    }

    /// Sets Z and N from a freshly loaded or computed value.
    pub(crate) fn set_load_flags(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & status::NEGATIVE != 0;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 | SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as it would be pushed by PHP.
    ///
    /// Bit layout (NV11DIZC): bits 4 and 5 always read as 1.
    ///
    /// ```
    /// use lib6502::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.set_flag_c(true);
    /// cpu.set_flag_n(true);
    /// assert_eq!(cpu.status(), 0b1011_0001);
    /// ```
    pub fn status(&self) -> u8 {
        let mut value = status::BREAK | status::UNUSED;

        if self.flag_c {
            value |= status::CARRY;
        }
        if self.flag_z {
            value |= status::ZERO;
        }
        if self.flag_i {
            value |= status::INTERRUPT_DISABLE;
        }
        if self.flag_d {
            value |= status::DECIMAL;
        }
        if self.flag_v {
            value |= status::OVERFLOW;
        }
        if self.flag_n {
            value |= status::NEGATIVE;
        }

        value
    }

    /// Loads all six flags from a status byte, as PLP and RTI do.
    /// Bits 4 and 5 are ignored.
    pub fn set_status(&mut self, value: u8) {
        self.flag_c = value & status::CARRY != 0;
        self.flag_z = value & status::ZERO != 0;
        self.flag_i = value & status::INTERRUPT_DISABLE != 0;
        self.flag_d = value & status::DECIMAL != 0;
        self.flag_v = value & status::OVERFLOW != 0;
        self.flag_n = value & status::NEGATIVE != 0;
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }
}
