//! # Status Flag Instructions
//!
//! Single-flag set/clear instructions. Each touches exactly one flag.
//! Setting D is recorded but arithmetic stays binary.

use crate::{MemoryBus, CPU};

/// Executes CLC (Clear Carry Flag).
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.flags.carry = false;
    0
}

/// Executes SEC (Set Carry Flag).
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.flags.carry = true;
    0
}

/// Executes CLI (Clear Interrupt Disable).
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.flags.interrupt_disable = false;
    0
}

/// Executes SEI (Set Interrupt Disable).
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.flags.interrupt_disable = true;
    0
}

/// Executes CLD (Clear Decimal Mode).
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.flags.decimal = false;
    0
}

/// Executes SED (Set Decimal Mode).
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.flags.decimal = true;
    0
}

/// Executes CLV (Clear Overflow Flag).
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.flags.overflow = false;
    0
}
