//! WebAssembly bindings for the cycle6502 engine.
//!
//! This module provides a JavaScript-callable wrapper around a CPU with a
//! flat 64 KiB memory, enabling browser-based stepping of 6502 programs.

pub mod api;

pub use api::Emulator6502;
