//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for loading an image, running a
//! cycle budget and inspecting CPU and memory state.

use crate::{Memory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One emulation session for JavaScript
#[wasm_bindgen]
pub struct Emulator {
    cpu: CPU,
    memory: Memory,
}

#[wasm_bindgen]
impl Emulator {
    /// Create a session with zeroed memory and an empty cycle budget
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator {
            cpu: CPU::new(),
            memory: Memory::new(),
        }
    }

    /// Zero memory, bind a cycle budget and copy `image` in from 0x0000
    pub fn load(&mut self, image: &[u8], cycles: f64) {
        self.memory.init(cycles as i64);
        self.memory.fill(image);
    }

    /// Send the reset signal (7 cycles)
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.memory);
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu
            .step(&mut self.memory)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Add `cycles` to the budget and run until it is spent. Returns the
    /// number of instructions fetched.
    pub fn execute(&mut self, cycles: f64) -> f64 {
        let remaining = self.memory.cycles();
        self.memory.set_cycles(remaining + cycles as i64);
        self.cpu.execute(&mut self.memory) as f64
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Remaining budget; negative after an overrun
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.memory.remaining_cycles() as f64
    }

    // Memory access methods

    /// Copy of the whole address space (costs no cycles)
    pub fn memory(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.memory.image())
    }

    /// Read a 256-byte page from memory (costs no cycles)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as usize) << 8;
        self.memory.image()[start..start + 256].to_vec()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
