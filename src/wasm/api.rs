//! WASM API for the 6502 engine.
//!
//! Provides JavaScript-callable interfaces for program loading, CPU control
//! and state inspection.

use crate::{CpuConfig, ExecutionError, FlatMemory, MemoryBus, CPU, RESET_VECTOR};
use std::num::NonZeroU32;
use wasm_bindgen::prelude::*;

fn to_js_error(err: ExecutionError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator with 64 KiB of zeroed RAM.
    ///
    /// `clock_hz` only matters for paced runs; 0 selects the default rate.
    #[wasm_bindgen(constructor)]
    pub fn new(clock_hz: u32) -> Self {
        let config = match NonZeroU32::new(clock_hz) {
            Some(hz) => CpuConfig::new(hz),
            None => CpuConfig::default(),
        };

        Emulator6502 {
            cpu: CPU::with_config(FlatMemory::new(), config),
        }
    }

    /// Copy a program into memory, point the reset vector at it and reset.
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        let memory = self.cpu.memory_mut();
        memory.write_bytes(start_addr, program);
        memory.write_bytes(RESET_VECTOR, &start_addr.to_le_bytes());
        self.cpu.reset();
    }

    /// Run the reset sequence
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Execute a single instruction and return the cycles it took
    pub fn step(&mut self) -> Result<u32, JsValue> {
        self.cpu.step().map_err(to_js_error)
    }

    /// Execute for at least `cycles` cycles and return the cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<f64, JsValue> {
        self.cpu
            .run_for_cycles(cycles as u64)
            .map(|executed| executed as f64)
            .map_err(to_js_error)
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

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> f64 {
        self.cpu.instructions() as f64
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as usize) << 8;
        self.cpu.memory().as_slice()[start..start + 256].to_vec()
    }
}
