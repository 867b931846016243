//! # Branch Instructions
//!
//! This module implements all conditional branch instructions:
//! - BCC / BCS: Branch on Carry Clear / Set
//! - BEQ / BNE: Branch on Zero Set / Clear
//! - BMI / BPL: Branch on Negative Set / Clear
//! - BVC / BVS: Branch on Overflow Clear / Set
//!
//! ## Cycle Costs
//!
//! - 2 cycles when the branch is not taken
//! - 3 cycles when taken to the same page
//! - 4 cycles when taken across a page boundary
//!
//! The page comparison is between the address of the next instruction and
//! the branch target.

use crate::addressing::{page_crossed, Operand};
use crate::{MemoryBus, CPU};

/// Takes the branch when `condition` holds and returns the extra cycles.
///
/// PC already points past the 2-byte branch instruction, which is the base
/// the signed offset is added to.
fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, condition: bool) -> u32 {
    let offset = match operand {
        Operand::Relative(offset) => offset,
        _ => unreachable!("branch with {:?} operand", operand),
    };

    if !condition {
        return 0;
    }

    let next = cpu.state.pc;
    let target = next.wrapping_add_signed(offset as i16);
    cpu.state.pc = target;

    if page_crossed(next, target) {
        2
    } else {
        1
    }
}

/// Executes BCC (Branch if Carry Clear).
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let condition = !cpu.state.flags.carry;
    branch_if(cpu, operand, condition)
}

/// Executes BCS (Branch if Carry Set).
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let condition = cpu.state.flags.carry;
    branch_if(cpu, operand, condition)
}

/// Executes BEQ (Branch if Equal, Z set).
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let condition = cpu.state.flags.zero;
    branch_if(cpu, operand, condition)
}

/// Executes BNE (Branch if Not Equal, Z clear).
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let condition = !cpu.state.flags.zero;
    branch_if(cpu, operand, condition)
}

/// Executes BMI (Branch if Minus, N set).
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let condition = cpu.state.flags.negative;
    branch_if(cpu, operand, condition)
}

/// Executes BPL (Branch if Plus, N clear).
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let condition = !cpu.state.flags.negative;
    branch_if(cpu, operand, condition)
}

/// Executes BVC (Branch if Overflow Clear).
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let condition = !cpu.state.flags.overflow;
    branch_if(cpu, operand, condition)
}

/// Executes BVS (Branch if Overflow Set).
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let condition = cpu.state.flags.overflow;
    branch_if(cpu, operand, condition)
}
