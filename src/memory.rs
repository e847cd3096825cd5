//! # Memory and Bus Abstraction
//!
//! This module provides the flat 64 KiB [`Memory`] used by an emulation session
//! and the [`MemoryBus`] trait through which the CPU reaches it.
//!
//! ## Cycle Accounting
//!
//! The session's cycle budget lives inside the memory object. Every indexed
//! access debits exactly one cycle, whether it is a read, a write, or a harness
//! peeking at memory after execution has finished. Internal CPU cycles that do
//! not touch the bus are debited through [`MemoryBus::idle`].
//!
//! Bulk operations (`init`, `fill`, `image`) are not bus activity and are free.

use std::cell::Cell;
use std::ops::{Index, IndexMut};

/// Number of addressable bytes (0x0000-0xFFFF).
pub const MEMORY_SIZE: usize = 0x10000;

/// Bus interface between the CPU and a cycle-charging memory.
///
/// Every method except `remaining_cycles` spends exactly one cycle of the
/// session budget.
///
/// # Examples
///
/// ```
/// use lib6502::{Memory, MemoryBus};
///
/// let mut mem = Memory::new();
/// mem.init(10);
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// mem.idle();
///
/// assert_eq!(mem.remaining_cycles(), 7);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address (1 cycle).
    fn read(&mut self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address (1 cycle).
    fn write(&mut self, addr: u16, value: u8);

    /// Spends one internal cycle without a bus transfer.
    fn idle(&mut self);

    /// Cycles left in the budget. May be negative once an instruction has
    /// overrun it.
    fn remaining_cycles(&self) -> i64;
}

/// Flat 64 KiB memory bound to a cycle budget.
///
/// # Examples
///
/// ```
/// use lib6502::Memory;
///
/// let mut mem = Memory::new();
/// mem.init(0x1FFFF);
/// mem.fill(&[0xAA, 0xBB, 0xCC]);
///
/// assert_eq!(*mem.access(0x0001), 0xBB);
/// *mem.access(0x0002) = 0x42;
/// assert_eq!(mem[0x0002], 0x42);
///
/// // Three indexed accesses, three cycles
/// assert_eq!(mem.cycles(), 0x1FFFF - 3);
/// ```
pub struct Memory {
    data: Box<[u8; MEMORY_SIZE]>,
    /// Remaining cycle budget. A `Cell` so that shared-reference indexing can
    /// still charge the access.
    cycles: Cell<i64>,
}

impl Memory {
    /// Creates a zero-filled memory with an empty budget.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
            cycles: Cell::new(0),
        }
    }

    /// Zeroes every cell and binds the session cycle budget.
    ///
    /// Must run before any CPU activity. Costs no cycles.
    pub fn init(&mut self, cycles: i64) {
        self.data.fill(0);
        self.cycles.set(cycles);
    }

    /// Copies a program image into memory starting at address 0x0000.
    ///
    /// Bytes beyond 0xFFFF are dropped. Costs no cycles.
    pub fn fill(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(MEMORY_SIZE);
        self.data[..len].copy_from_slice(&bytes[..len]);
    }

    /// Returns the cell at `addr` for reading or writing.
    ///
    /// Always debits one cycle, including when called by a test harness to
    /// inspect memory after execution.
    pub fn access(&mut self, addr: u16) -> &mut u8 {
        self.charge();
        &mut self.data[addr as usize]
    }

    /// Remaining cycle budget.
    pub fn cycles(&self) -> i64 {
        self.cycles.get()
    }

    /// Replaces the remaining cycle budget without touching memory contents.
    pub fn set_cycles(&mut self, cycles: i64) {
        self.cycles.set(cycles);
    }

    /// The whole address space as a slice, for bulk dumps. Costs no cycles.
    pub fn image(&self) -> &[u8] {
        &self.data[..]
    }

    fn charge(&self) {
        self.cycles.set(self.cycles.get() - 1);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<u16> for Memory {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        self.charge();
        &self.data[addr as usize]
    }
}

impl IndexMut<u16> for Memory {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        self.access(addr)
    }
}

impl MemoryBus for Memory {
    fn read(&mut self, addr: u16) -> u8 {
        *self.access(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        *self.access(addr) = value;
    }

    fn idle(&mut self) {
        self.charge();
    }

    fn remaining_cycles(&self) -> i64 {
        self.cycles.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_zeroes_and_binds_budget() {
        let mut mem = Memory::new();
        mem.fill(&[0xFF; 16]);
        mem.init(100);

        assert!(mem.image().iter().all(|&b| b == 0));
        assert_eq!(mem.cycles(), 100);
    }

    #[test]
    fn test_fill_is_free() {
        let mut mem = Memory::new();
        mem.init(5);
        mem.fill(&[1, 2, 3]);

        assert_eq!(mem.cycles(), 5);
        assert_eq!(&mem.image()[..4], &[1, 2, 3, 0]);
    }

    #[test]
    fn test_fill_drops_bytes_past_end() {
        let mut mem = Memory::new();
        let mut image = vec![0xEA; MEMORY_SIZE + 10];
        image[MEMORY_SIZE - 1] = 0x42;
        mem.fill(&image);

        assert_eq!(mem.image().len(), MEMORY_SIZE);
        assert_eq!(mem.image()[MEMORY_SIZE - 1], 0x42);
    }

    #[test]
    fn test_every_access_costs_one_cycle() {
        let mut mem = Memory::new();
        mem.init(10);

        let _ = mem[0x0000];
        mem[0x0001] = 7;
        *mem.access(0x0002) = 9;
        mem.idle();

        assert_eq!(mem.cycles(), 6);
    }

    #[test]
    fn test_budget_goes_negative() {
        let mut mem = Memory::new();
        mem.init(1);

        mem.write(0x0000, 1);
        mem.write(0x0001, 2);

        assert_eq!(mem.remaining_cycles(), -1);
    }
}
