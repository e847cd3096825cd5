//! WebAssembly bindings for the lib6502 emulator.
//!
//! This module provides a JavaScript-callable session object that pairs one
//! CPU with one cycle-budgeted memory.

pub mod api;

pub use api::Emulator;
