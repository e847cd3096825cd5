//! Fibonacci table demo
//!
//! Fills zero page with the Fibonacci sequence (mod 256) using a subroutine
//! called once per entry, then dumps the page.
//! Run with: `cargo run --example fibonacci`

use lib6502::{Memory, CPU};

/// Cycles needed to fill the table, with some NOP slack after the end.
const BUDGET: i64 = 12_000;

fn build_image() -> Vec<u8> {
    let mut image = vec![0xEA; 0x10000];

    // Reset vector -> $2008
    image[0xFFFC] = 0x08;
    image[0xFFFD] = 0x20;

    #[rustfmt::skip]
    let main = [
        0xA2, 0x00,       // LDX #$00
        0x20, 0x06, 0x30, // loop: JSR next
        0xE0, 0xFF,       // CPX #$FF
        0xD0, 0xF9,       // BNE loop
        0xA2, 0x00,       // LDX #$00
        0x38,             // SEC
        0x90, 0xF4,       // BCC loop
    ];
    image[0x2008..0x2008 + main.len()].copy_from_slice(&main);

    #[rustfmt::skip]
    let subroutine = [
        0xA9, 0x01,       // seed: LDA #$01
        0x95, 0x00,       // STA $00,X
        0xE8,             // INX
        0x60,             // RTS
        0xE0, 0x00,       // next: CPX #$00
        0xF0, 0xF6,       // BEQ seed
        0xE0, 0x01,       // CPX #$01
        0xF0, 0xF2,       // BEQ seed
        0xB5, 0xFF,       // LDA $FF,X
        0x18,             // CLC
        0x75, 0xFE,       // ADC $FE,X
        0x95, 0x00,       // STA $00,X
        0xE8,             // INX
        0x60,             // RTS
    ];
    image[0x3000..0x3000 + subroutine.len()].copy_from_slice(&subroutine);

    image
}

fn main() {
    let mut memory = Memory::new();
    memory.init(BUDGET);
    memory.fill(&build_image());

    let mut cpu = CPU::new();
    cpu.reset(&mut memory);
    let retired = cpu.execute(&mut memory);

    println!("Fibonacci Demo");
    println!("==============\n");
    println!("Instructions: {}", retired);
    println!("Cycles left:  {}", memory.cycles());
    println!("PC: ${:04X}  A: ${:02X}  X: ${:02X}\n", cpu.pc(), cpu.a(), cpu.x());

    for (row, chunk) in memory.image()[..0x100].chunks(16).enumerate() {
        let bytes: Vec<String> = chunk.iter().map(|b| format!("{:02X}", b)).collect();
        println!("{:04X}: {}", row * 16, bytes.join(" "));
    }
}
