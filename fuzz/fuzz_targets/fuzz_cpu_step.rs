//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, runs a short burst of
//! instructions and checks the cycle accounting and the failure contract.

#![no_main]

use arbitrary::Arbitrary;
use cycle6502::{FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV-BDIZC status byte
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes at the reset target
    program: [u8; 32],
    /// Zero page contents (pointers for indirect modes)
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Data region for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::with_reset_vector(0x8000);
    memory.write_bytes(0x8000, &input.memory.program);
    memory.write_bytes(0x0000, &input.memory.zero_page);
    memory.write_bytes(0x0100, &input.memory.stack_page);
    memory.write_bytes(0x4000, &input.memory.main_memory);

    let mut cpu = CPU::new(memory);
    cpu.reset();

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    for _ in 0..(input.steps % 16) {
        let before = cpu.snapshot();
        match cpu.step() {
            Ok(cycles) => {
                // No documented instruction takes fewer than 2 or more than 7 cycles
                assert!((2..=7).contains(&cycles));
                let after = cpu.snapshot();
                assert_eq!(after.total_cycles, before.total_cycles + cycles as u64);
                assert_eq!(after.total_instructions, before.total_instructions + 1);
            }
            Err(_) => {
                // A rejected opcode must leave the CPU untouched
                assert_eq!(cpu.snapshot(), before);
                break;
            }
        }
    }
});
