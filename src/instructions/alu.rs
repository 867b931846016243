//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: binary add/subtract with carry
//! - AND, ORA, EOR: bitwise logic on the accumulator
//! - BIT: bit test against memory
//! - CMP, CPX, CPY: register comparison
//!
//! Decimal mode is ignored; D never changes the result.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Adds `value` and the carry flag to A, setting N, V, Z and C.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.state.a;
    let carry_in = cpu.state.flags.carry as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    let flags = &mut cpu.state.flags;
    flags.carry = sum > 0xFF;
    // Both inputs share a sign that the result does not
    flags.overflow = ((a ^ result) & (value ^ result) & 0x80) != 0;
    flags.set_zn(result);

    cpu.state.a = result;
}

/// Sets C, Z and N from `register - value`.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.state.flags.carry = register >= value;
    cpu.state.flags.set_zn(result);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// A + M + C -> A. Sets C on unsigned overflow and V on signed overflow.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `operand` - Immediate value or memory address to read
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let (value, penalty) = cpu.read_operand(operand);
    add_with_carry(cpu, value);
    penalty
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A - M - (1 - C) -> A, computed as A + !M + C. C is the inverted borrow:
/// set when no borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let (value, penalty) = cpu.read_operand(operand);
    add_with_carry(cpu, !value);
    penalty
}

/// Executes the AND (Logical AND) instruction.
///
/// A & M -> A. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let (value, penalty) = cpu.read_operand(operand);
    cpu.state.a &= value;
    cpu.state.flags.set_zn(cpu.state.a);
    penalty
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// A | M -> A. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let (value, penalty) = cpu.read_operand(operand);
    cpu.state.a |= value;
    cpu.state.flags.set_zn(cpu.state.a);
    penalty
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// A ^ M -> A. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let (value, penalty) = cpu.read_operand(operand);
    cpu.state.a ^= value;
    cpu.state.flags.set_zn(cpu.state.a);
    penalty
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M. N and V are copied from bits 7 and 6 of M.
/// A is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let (value, _) = cpu.read_operand(operand);
    let flags = &mut cpu.state.flags;
    flags.zero = cpu.state.a & value == 0;
    flags.negative = value & 0x80 != 0;
    flags.overflow = value & 0x40 != 0;
    0
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let (value, penalty) = cpu.read_operand(operand);
    let register = cpu.state.a;
    compare(cpu, register, value);
    penalty
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let (value, _) = cpu.read_operand(operand);
    let register = cpu.state.x;
    compare(cpu, register, value);
    0
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u32 {
    let (value, _) = cpu.read_operand(operand);
    let register = cpu.state.y;
    compare(cpu, register, value);
    0
}
