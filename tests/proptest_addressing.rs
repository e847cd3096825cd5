//! Property-based tests for addressing mode calculations.
//!
//! These tests verify that the addressing modes calculate effective
//! addresses correctly and charge the page-crossing cycle exactly when the
//! index carries into the high byte.

use lib6502::{Memory, CPU, MEMORY_SIZE};
use proptest::prelude::*;

const BUDGET: i64 = 1000;

/// Program at 0x0200 with an optional data byte placed at `target`.
fn setup(program: &[u8], target: u16, value: u8) -> (CPU, Memory) {
    let mut image = vec![0u8; MEMORY_SIZE];
    image[target as usize] = value;
    image[0x0200..0x0200 + program.len()].copy_from_slice(program);

    let mut memory = Memory::new();
    memory.init(BUDGET);
    memory.fill(&image);

    let mut cpu = CPU::new();
    cpu.set_pc(0x0200);
    cpu.set_sp(0xFD);
    (cpu, memory)
}

fn spent(memory: &Memory) -> i64 {
    BUDGET - memory.cycles()
}

proptest! {
    /// Property: Zero page,X addressing wraps within zero page
    #[test]
    fn prop_zero_page_x_wraps_in_zero_page(base in any::<u8>(), x in any::<u8>(), value in any::<u8>()) {
        let effective = base.wrapping_add(x) as u16;
        let (mut cpu, mut mem) = setup(&[0xB5, base], effective, value);
        cpu.set_x(x);

        cpu.step(&mut mem).unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(spent(&mem), 4);
    }

    /// Property: Absolute,X costs one extra cycle exactly on a page cross
    #[test]
    fn prop_absolute_x_page_cross_penalty(base in 0x1000u16..0xF000, x in any::<u8>(), value in any::<u8>()) {
        let effective = base + x as u16;
        let (mut cpu, mut mem) = setup(&[0xBD, base as u8, (base >> 8) as u8], effective, value);
        cpu.set_x(x);

        cpu.step(&mut mem).unwrap();

        let crossed = (base & 0xFF00) != (effective & 0xFF00);
        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(spent(&mem), 4 + crossed as i64);
    }

    /// Property: Absolute,Y stores always take five cycles
    #[test]
    fn prop_absolute_y_store_fixed_cost(base in 0x1000u16..0xF000, y in any::<u8>(), a in any::<u8>()) {
        let effective = base + y as u16;
        let (mut cpu, mut mem) = setup(&[0x99, base as u8, (base >> 8) as u8], 0x0000, 0);
        cpu.set_a(a);
        cpu.set_y(y);

        cpu.step(&mut mem).unwrap();

        prop_assert_eq!(mem.image()[effective as usize], a);
        prop_assert_eq!(spent(&mem), 5);
    }

    /// Property: Indexed indirect reads its pointer from (operand + X) & 0xFF
    #[test]
    fn prop_indirect_x_pointer_in_zero_page(operand in any::<u8>(), x in any::<u8>(), value in any::<u8>()) {
        let pointer = operand.wrapping_add(x);
        let mut image = vec![0u8; MEMORY_SIZE];
        image[pointer as usize] = 0x00;
        image[pointer.wrapping_add(1) as usize] = 0x40;
        image[0x4000] = value;
        image[0x0200] = 0xA1;
        image[0x0201] = operand;

        let mut mem = Memory::new();
        mem.init(BUDGET);
        mem.fill(&image);
        let mut cpu = CPU::new();
        cpu.set_pc(0x0200);
        cpu.set_x(x);

        cpu.step(&mut mem).unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(spent(&mem), 6);
    }

    /// Property: Branch targets are relative to the next instruction
    #[test]
    fn prop_branch_target(offset in any::<u8>()) {
        // BNE with Z clear always branches
        let (mut cpu, mut mem) = setup(&[0xD0, offset], 0x0000, 0);

        cpu.step(&mut mem).unwrap();

        let target = 0x0202u16.wrapping_add_signed(offset as i8 as i16);
        let crossed = (target & 0xFF00) != 0x0200;
        prop_assert_eq!(cpu.pc(), target);
        prop_assert_eq!(spent(&mem), 3 + crossed as i64);
    }
}
