//! Tests for the single-flag instructions (CLC, SEC, CLI, SEI, CLD, SED, CLV).

use cycle6502::{FlatMemory, MemoryBus, StatusFlags, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::with_reset_vector(0x8000));
    cpu.reset();
    cpu
}

/// Runs one flag instruction starting from `initial` and returns the flags
fn run_flag_op(opcode: u8, initial: StatusFlags) -> StatusFlags {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, opcode);
    cpu.set_flags(initial);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.pc(), 0x8001);
    cpu.flags()
}

fn all_set() -> StatusFlags {
    StatusFlags::from_byte(0xFF)
}

#[test]
fn test_clc() {
    let flags = run_flag_op(0x18, all_set());
    assert_eq!(flags, StatusFlags { carry: false, ..all_set() });
}

#[test]
fn test_sec() {
    let flags = run_flag_op(0x38, StatusFlags::default());
    assert_eq!(flags, StatusFlags { carry: true, ..StatusFlags::default() });
}

#[test]
fn test_cli() {
    let flags = run_flag_op(0x58, all_set());
    assert_eq!(flags, StatusFlags { interrupt_disable: false, ..all_set() });
}

#[test]
fn test_sei() {
    let flags = run_flag_op(0x78, StatusFlags::default());
    assert_eq!(flags, StatusFlags { interrupt_disable: true, ..StatusFlags::default() });
}

#[test]
fn test_cld() {
    let flags = run_flag_op(0xD8, all_set());
    assert_eq!(flags, StatusFlags { decimal: false, ..all_set() });
}

#[test]
fn test_sed() {
    let flags = run_flag_op(0xF8, StatusFlags::default());
    assert_eq!(flags, StatusFlags { decimal: true, ..StatusFlags::default() });
}

#[test]
fn test_clv() {
    let flags = run_flag_op(0xB8, all_set());
    assert_eq!(flags, StatusFlags { overflow: false, ..all_set() });
}
