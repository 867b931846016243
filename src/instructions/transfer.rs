//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy one register into another and update
//! Z and N from the copied value. TXS loads the stack pointer and leaves
//! the flags alone.

use crate::{MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.x = cpu.state.a;
    cpu.state.flags.set_zn(cpu.state.x);
    0
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.y = cpu.state.a;
    cpu.state.flags.set_zn(cpu.state.y);
    0
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.a = cpu.state.x;
    cpu.state.flags.set_zn(cpu.state.a);
    0
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.a = cpu.state.y;
    cpu.state.flags.set_zn(cpu.state.a);
    0
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.x = cpu.state.sp;
    cpu.state.flags.set_zn(cpu.state.x);
    0
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The only transfer that does not affect flags.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) -> u32 {
    cpu.state.sp = cpu.state.x;
    0
}
