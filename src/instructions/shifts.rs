//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR work on either the accumulator or a memory byte.
//! The bit shifted out lands in C; Z and N follow the result. Memory forms
//! are read-modify-write and never pay a page-cross penalty.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Applies `shift` to the operand, writes the result back and sets C, Z, N.
///
/// `shift` receives the old value and the incoming carry and returns the
/// new value and the outgoing carry.
fn read_modify_write<M, F>(cpu: &mut CPU<M>, operand: Operand, shift: F) -> u32
where
    M: MemoryBus,
    F: FnOnce(u8, bool) -> (u8, bool),
{
    let (value, _) = cpu.read_operand(operand);
    let (result, carry) = shift(value, cpu.state.flags.carry);
    cpu.write_operand(operand, result);
    cpu.state.flags.carry = carry;
    cpu.state.flags.set_zn(result);
    0
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to C, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    read_modify_write(cpu, operand, |value, _| (value << 1, value & 0x80 != 0))
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to C, bit 7 becomes 0, so N always ends up clear.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    read_modify_write(cpu, operand, |value, _| (value >> 1, value & 0x01 != 0))
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Old C enters bit 0, bit 7 goes to C.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    read_modify_write(cpu, operand, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Old C enters bit 7, bit 0 goes to C.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    read_modify_write(cpu, operand, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}
