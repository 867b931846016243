//! Tests for load (LDA, LDX, LDY) and store (STA, STX, STY) instructions.

use cycle6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::with_reset_vector(0x8000));
    cpu.reset();
    cpu
}

// ========== LDA ==========

#[test]
fn test_lda_immediate_negative() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_bytes(0x8000, &[0xA9, 0x80]);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_immediate_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_bytes(0x8000, &[0xA9, 0x00]);
    cpu.set_a(0x55);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lda_leaves_carry_and_overflow() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_bytes(0x8000, &[0xA9, 0x01]);
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);

    cpu.step().unwrap();
    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
}

#[test]
fn test_lda_absolute_x_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_bytes(0x8000, &[0xBD, 0x80, 0x20]);
    cpu.memory_mut().write(0x2100, 0x33);
    cpu.set_x(0x80);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.a(), 0x33);
}

#[test]
fn test_lda_indexed_indirect_pointer_wraps() {
    let mut cpu = setup_cpu();
    // (zp,X) with $FE + X=1 -> pointer at $FF, high byte from $00
    cpu.memory_mut().write_bytes(0x8000, &[0xA1, 0xFE]);
    cpu.memory_mut().write(0x00FF, 0x34);
    cpu.memory_mut().write(0x0000, 0x12);
    cpu.memory_mut().write(0x1234, 0x77);
    cpu.set_x(0x01);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.a(), 0x77);
}

// ========== LDX / LDY ==========

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_bytes(0x8000, &[0xB6, 0x10]);
    cpu.memory_mut().write(0x0015, 0xC0);
    cpu.set_y(0x05);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.x(), 0xC0);
    assert!(cpu.flag_n());
}

#[test]
fn test_ldx_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_bytes(0x8000, &[0xBE, 0xFF, 0x30]);
    cpu.memory_mut().write(0x3100, 0x01);
    cpu.set_y(0x01);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.x(), 0x01);
}

#[test]
fn test_ldy_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_bytes(0x8000, &[0xAC, 0x00, 0x40]);
    cpu.memory_mut().write(0x4000, 0x7F);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.y(), 0x7F);
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8003);
}

// ========== Stores ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_bytes(0x8000, &[0x85, 0x20]);
    cpu.set_a(0x99);
    let flags_before = cpu.status();

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.memory().read(0x0020), 0x99);
    assert_eq!(cpu.status(), flags_before);
}

#[test]
fn test_sta_absolute_x_never_pays_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_bytes(0x8000, &[0x9D, 0xFF, 0x20]);
    cpu.set_x(0x01);
    cpu.set_a(0x12);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.memory().read(0x2100), 0x12);
}

#[test]
fn test_sta_indirect_indexed_fixed_cost() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_bytes(0x8000, &[0x91, 0x10]);
    cpu.memory_mut().write_bytes(0x0010, &[0xFF, 0x20]);
    cpu.set_y(0x01);
    cpu.set_a(0x5A);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.memory().read(0x2100), 0x5A);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_bytes(0x8000, &[0x96, 0xFF]);
    cpu.set_x(0x44);
    cpu.set_y(0x02);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.memory().read(0x0001), 0x44);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_bytes(0x8000, &[0x8C, 0x00, 0x02]);
    cpu.set_y(0x21);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.memory().read(0x0200), 0x21);
}
