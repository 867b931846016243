//! # 6502 Instruction Execution Engine
//!
//! A cycle-counting NMOS 6502 core: the opcode table, the addressing-mode
//! resolver, the per-instruction ALU and flag semantics, and the
//! fetch-decode-execute loop that ties them together.
//!
//! ## Quick Start
//!
//! ```rust
//! use cycle6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Reset vector points at 0x1000
//! let mut memory = FlatMemory::with_reset_vector(0x1000);
//!
//! // ADC #$0C
//! memory.write_bytes(0x1000, &[0x69, 0x0C]);
//!
//! let mut cpu = CPU::new(memory);
//! cpu.reset();
//! assert_eq!(cpu.pc(), 0x1000);
//! assert_eq!(cpu.sp(), 0xFD);
//!
//! cpu.set_a(3);
//! let cycles = cpu.step().unwrap();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.a(), 15);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Table-Driven Design**: all opcode metadata lives in `OPCODE_TABLE`
//! - **Exhaustive Dispatch**: one `match` over `Operation` selects the semantics
//! - **Fail Fast**: opcodes without semantics return `UnimplementedOpcode`
//!   instead of executing as something else
//!
//! ## Modules
//!
//! - `cpu` - execution engine (reset, step, run, snapshot)
//! - `state` - register file, status flags and counters
//! - `memory` - MemoryBus trait and FlatMemory
//! - `opcodes` - opcode metadata table
//! - `addressing` - addressing modes and operand resolution
//! - `config` / `clock` - clock rate and real-time pacing
//!
//! Decimal (BCD) arithmetic and interrupts (BRK, RTI, IRQ, NMI) are not
//! emulated.

pub mod addressing;
pub mod clock;
pub mod config;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod state;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use clock::Pacer;
pub use config::{CpuConfig, DEFAULT_CLOCK_HZ};
pub use cpu::{CPU, RESET_CYCLES, RESET_VECTOR, STACK_BASE};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use state::{ProcessorState, StatusFlags};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched opcode has no semantics in this engine.
    ///
    /// Carries the opcode byte and the address it was fetched from. The CPU
    /// is left exactly as it was before the fetch.
    UnimplementedOpcode { opcode: u8, pc: u16 },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnimplementedOpcode { opcode, pc } => {
                write!(f, "Opcode 0x{:02X} at ${:04X} is not implemented", opcode, pc)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
