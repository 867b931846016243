//! # Control Flow Instructions
//!
//! This module implements control flow instructions:
//! - JMP: Jump (absolute and indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - NOP: No Operation
//!
//! JMP indirect reproduces the NMOS page-wrap bug; that happens during
//! operand resolution, so the target arrives here already computed.

use super::effective_address;
use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Loads PC with the target address. No flags are affected.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    cpu.state.pc = effective_address(operand);
    0
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR itself (return address
/// minus one), high byte first, then jumps to the target.
///
/// # Stack Layout After JSR
///
/// ```text
/// SP+2 → [return_addr_high]
/// SP+1 → [return_addr_low]
/// SP   → (next free slot)
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let target = effective_address(operand);
    let return_addr = cpu.state.pc.wrapping_sub(1);
    cpu.push_word(return_addr);
    cpu.state.pc = target;
    0
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the address JSR pushed and resumes at the byte after it.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    let return_addr = cpu.pull_word();
    cpu.state.pc = return_addr.wrapping_add(1);
    0
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop() -> u32 {
    0
}
