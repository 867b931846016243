//! # Load and Store Instructions
//!
//! Loads copy memory (or an immediate) into a register and update Z and N.
//! Stores copy a register to memory and touch no flags. Stores always pay
//! their full base cost, so indexing never adds a cycle here.

use super::effective_address;
use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `operand` - Immediate value or memory address to read
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let (value, penalty) = cpu.read_operand(operand);
    cpu.state.a = value;
    cpu.state.flags.set_zn(value);
    penalty
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let (value, penalty) = cpu.read_operand(operand);
    cpu.state.x = value;
    cpu.state.flags.set_zn(value);
    penalty
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let (value, penalty) = cpu.read_operand(operand);
    cpu.state.y = value;
    cpu.state.flags.set_zn(value);
    penalty
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let addr = effective_address(operand);
    cpu.memory.write(addr, cpu.state.a);
    0
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let addr = effective_address(operand);
    cpu.memory.write(addr, cpu.state.x);
    0
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let addr = effective_address(operand);
    cpu.memory.write(addr, cpu.state.y);
    0
}
