//! Tests for the conditional branch instructions.
//!
//! Tests cover:
//! - Condition selection for all eight branches
//! - 2 / 3 / 4 cycle timing
//! - Forward and backward offsets

use lib6502::{Memory, CPU, MEMORY_SIZE};

const BUDGET: i64 = 1000;

fn setup(program: &[u8]) -> (CPU, Memory) {
    let mut image = vec![0u8; MEMORY_SIZE];
    image[0x8000..0x8000 + program.len()].copy_from_slice(program);

    let mut memory = Memory::new();
    memory.init(BUDGET);
    memory.fill(&image);

    let mut cpu = CPU::new();
    cpu.set_pc(0x8000);
    (cpu, memory)
}

fn spent(memory: &Memory) -> i64 {
    BUDGET - memory.cycles()
}

#[test]
fn test_beq_not_taken() {
    let (mut cpu, mut mem) = setup(&[0xF0, 0x10]);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(spent(&mem), 2);
}

#[test]
fn test_beq_taken_forward() {
    let (mut cpu, mut mem) = setup(&[0xF0, 0x10]);
    cpu.set_flag_z(true);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x8012);
    assert_eq!(spent(&mem), 3);
}

#[test]
fn test_bne_taken_backward_across_page() {
    let (mut cpu, mut mem) = setup(&[0xD0, 0xFC]);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x7FFE);
    assert_eq!(spent(&mem), 4);
}

#[test]
fn test_branch_to_self_loop() {
    // BCC -2 branches back onto itself
    let (mut cpu, mut mem) = setup(&[0x90, 0xFE]);

    cpu.step(&mut mem).unwrap();
    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(spent(&mem), 6);
}

#[test]
fn test_branch_conditions_with_flags_clear() {
    let cases = [
        (0x10, "BPL", true),
        (0x30, "BMI", false),
        (0x50, "BVC", true),
        (0x70, "BVS", false),
        (0x90, "BCC", true),
        (0xB0, "BCS", false),
        (0xD0, "BNE", true),
        (0xF0, "BEQ", false),
    ];

    for (opcode, name, taken) in cases {
        let (mut cpu, mut mem) = setup(&[opcode, 0x04]);
        cpu.step(&mut mem).unwrap();

        let expected = if taken { 0x8006 } else { 0x8002 };
        assert_eq!(cpu.pc(), expected, "{} with flags clear", name);
    }
}

#[test]
fn test_branch_conditions_with_flags_set() {
    let cases = [
        (0x10, "BPL", false),
        (0x30, "BMI", true),
        (0x50, "BVC", false),
        (0x70, "BVS", true),
        (0x90, "BCC", false),
        (0xB0, "BCS", true),
        (0xD0, "BNE", false),
        (0xF0, "BEQ", true),
    ];

    for (opcode, name, taken) in cases {
        let (mut cpu, mut mem) = setup(&[opcode, 0x04]);
        cpu.set_status(0xFF);
        cpu.step(&mut mem).unwrap();

        let expected = if taken { 0x8006 } else { 0x8002 };
        assert_eq!(cpu.pc(), expected, "{} with flags set", name);
    }
}
