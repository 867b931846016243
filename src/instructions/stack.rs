//! # Stack Instructions
//!
//! PHA, PHP, PLA and PLP move a byte between a register and page one.
//! A push writes at 0x0100 + S and then decrements S; a pull increments S
//! and then reads. S wraps within the page.

use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    let a = cpu.state.a;
    cpu.push(a);
    0
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has B (bit 4) and bit 5 set. The live flags are
/// not modified.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    let status = cpu.state.flags.to_byte() | crate::state::status_bits::BREAK;
    cpu.push(status);
    0
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Updates Z and N from the pulled value.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    let value = cpu.pull();
    cpu.state.a = value;
    cpu.state.flags.set_zn(value);
    0
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Restores N, V, D, I, Z and C from the pulled byte. B and bit 5 do not
/// exist as flip-flops, so the B flag keeps its current value.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    let status = cpu.pull();
    cpu.state.flags.restore_from_stack(status);
    0
}
