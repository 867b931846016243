//! # Increment and Decrement Instructions
//!
//! All six wrap modulo 256 and update Z and N. C and V are never touched.

use super::effective_address;
use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
///
/// Read-modify-write: indexed forms pay the fixed base cost only.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let addr = effective_address(operand);
    let result = cpu.memory.read(addr).wrapping_add(1);
    cpu.memory.write(addr, result);
    cpu.state.flags.set_zn(result);
    0
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let addr = effective_address(operand);
    let result = cpu.memory.read(addr).wrapping_sub(1);
    cpu.memory.write(addr, result);
    cpu.state.flags.set_zn(result);
    0
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.x = cpu.state.x.wrapping_add(1);
    cpu.state.flags.set_zn(cpu.state.x);
    0
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.y = cpu.state.y.wrapping_add(1);
    cpu.state.flags.set_zn(cpu.state.y);
    0
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.x = cpu.state.x.wrapping_sub(1);
    cpu.state.flags.set_zn(cpu.state.x);
    0
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.y = cpu.state.y.wrapping_sub(1);
    cpu.state.flags.set_zn(cpu.state.y);
    0
}
