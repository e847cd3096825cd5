//! Tests for JMP, JSR, RTS, BRK, RTI and NOP.
//!
//! Tests cover:
//! - Return address conventions for JSR/RTS and BRK/RTI
//! - The JMP indirect page-wrap bug
//! - Cycle counts

use lib6502::{Memory, CPU, MEMORY_SIZE};

const BUDGET: i64 = 1000;

fn setup(program: &[u8], data: &[(u16, u8)]) -> (CPU, Memory) {
    let mut image = vec![0u8; MEMORY_SIZE];
    image[0x8000..0x8000 + program.len()].copy_from_slice(program);
    // BRK vector -> 0x9000
    image[0xFFFE] = 0x00;
    image[0xFFFF] = 0x90;
    for &(addr, value) in data {
        image[addr as usize] = value;
    }

    let mut memory = Memory::new();
    memory.init(BUDGET);
    memory.fill(&image);

    let mut cpu = CPU::new();
    cpu.set_pc(0x8000);
    cpu.set_sp(0xFD);
    (cpu, memory)
}

fn spent(memory: &Memory) -> i64 {
    BUDGET - memory.cycles()
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute() {
    let (mut cpu, mut mem) = setup(&[0x4C, 0x34, 0x12], &[]);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(spent(&mem), 3);
}

#[test]
fn test_jmp_indirect() {
    let (mut cpu, mut mem) = setup(&[0x6C, 0x00, 0x30], &[(0x3000, 0x78), (0x3001, 0x56)]);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x5678);
    assert_eq!(spent(&mem), 5);
}

#[test]
fn test_jmp_indirect_wraps_within_page() {
    let (mut cpu, mut mem) = setup(
        &[0x6C, 0xFF, 0x30],
        &[(0x30FF, 0x34), (0x3000, 0x12), (0x3100, 0x99)],
    );

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_leaves_flags_and_stack() {
    let (mut cpu, mut mem) = setup(&[0x4C, 0x00, 0x90], &[]);
    cpu.set_status(0xC3);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.status(), 0xF3);
    assert_eq!(cpu.sp(), 0xFD);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_pushes_last_byte_address() {
    let (mut cpu, mut mem) = setup(&[0x20, 0x00, 0x90], &[]);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFB);
    assert_eq!(mem.image()[0x01FD], 0x80);
    assert_eq!(mem.image()[0x01FC], 0x02);
    assert_eq!(spent(&mem), 6);
}

#[test]
fn test_jsr_rts_returns_after_call() {
    let (mut cpu, mut mem) = setup(&[0x20, 0x00, 0x90], &[(0x9000, 0x60)]);

    cpu.step(&mut mem).unwrap();
    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(spent(&mem), 12);
}

#[test]
fn test_rts_adds_one_to_pulled_address() {
    let (mut cpu, mut mem) = setup(&[0x60], &[(0x01FE, 0xFF), (0x01FF, 0x12)]);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x1300);
    assert_eq!(cpu.sp(), 0xFF);
}

// ========== BRK / RTI ==========

#[test]
fn test_brk_pushes_state_and_vectors() {
    let (mut cpu, mut mem) = setup(&[0x00, 0xEA], &[]);
    cpu.set_flag_c(true);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFA);
    assert_eq!(mem.image()[0x01FD], 0x80);
    assert_eq!(mem.image()[0x01FC], 0x02);
    assert_eq!(mem.image()[0x01FB], 0b0011_0001);
    assert!(cpu.flag_i());
    assert_eq!(spent(&mem), 7);
}

#[test]
fn test_brk_rti_round_trip() {
    let (mut cpu, mut mem) = setup(&[0x00, 0xEA], &[(0x9000, 0x40)]);
    cpu.set_flag_c(true);

    cpu.step(&mut mem).unwrap();
    cpu.step(&mut mem).unwrap();

    // Execution resumes after the padding byte
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_i());
    assert_eq!(spent(&mem), 13);
}

#[test]
fn test_rti_uses_pulled_pc_unchanged() {
    let (mut cpu, mut mem) = setup(
        &[0x40],
        &[(0x01FB, 0xC3), (0x01FC, 0x34), (0x01FD, 0x12)],
    );
    cpu.set_sp(0xFA);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert!(cpu.flag_n() && cpu.flag_v() && cpu.flag_z() && cpu.flag_c());
    assert_eq!(spent(&mem), 6);
}

// ========== NOP ==========

#[test]
fn test_nop() {
    let (mut cpu, mut mem) = setup(&[0xEA], &[]);
    let before = cpu.clone();

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.status(), before.status());
    assert_eq!(cpu.a(), before.a());
    assert_eq!(spent(&mem), 2);
}
