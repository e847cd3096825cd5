//! # 6502 CPU Emulator Core
//!
//! A cycle-budgeted NMOS 6502 CPU emulator: a flat 64 KiB memory that charges
//! one cycle per access and a CPU that runs until the budget is spent.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib6502::{CPU, Memory};
//!
//! // LDA #$42 ; STA $10
//! let mut image = vec![0xEA; 0x10000];
//! image[0x8000..0x8004].copy_from_slice(&[0xA9, 0x42, 0x85, 0x10]);
//! image[0xFFFC] = 0x00; // Reset vector low byte
//! image[0xFFFD] = 0x80; // Reset vector high byte
//!
//! let mut memory = Memory::new();
//! memory.init(12);
//! memory.fill(&image);
//!
//! let mut cpu = CPU::new();
//! cpu.reset(&mut memory); // 7 cycles
//! cpu.execute(&mut memory); // LDA (2) + STA (3)
//!
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(memory.image()[0x10], 0x42);
//! assert_eq!(memory.cycles(), 0);
//! ```
//!
//! ## Architecture
//!
//! - **Memory owns the clock**: the cycle budget lives in [`Memory`] and every
//!   bus access debits one cycle, so instruction timing falls out of the bus
//!   traffic each instruction generates.
//! - **CPU borrows the bus**: [`CPU`] holds registers and flags only; every
//!   operation takes a `&mut impl MemoryBus`.
//! - **Table-driven decode**: all opcode metadata lives in [`OPCODE_TABLE`].
//!
//! ## Modules
//!
//! - `cpu` - CPU state, reset, step and the execute loop
//! - `memory` - MemoryBus trait and the cycle-charging flat memory
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and effective-address resolution

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{combine, Access, AddressingMode};
pub use cpu::{CPU, IRQ_VECTOR, RESET_VECTOR, STACK_BASE};
pub use memory::{Memory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{decode, Mnemonic, OpcodeMetadata, OPCODE_TABLE};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte is not one of the 151 documented opcodes.
    ///
    /// `address` is where the opcode was fetched from.
    IllegalOpcode { opcode: u8, address: u16 },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode { opcode, address } => {
                write!(f, "illegal opcode 0x{:02X} at 0x{:04X}", opcode, address)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
