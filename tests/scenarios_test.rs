//! End-to-end scenarios: reset from a vector, then execute small programs
//! loaded at 0x1000.

use cycle6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::with_reset_vector(0x1000);
    memory.write_bytes(0x1000, program);
    let mut cpu = CPU::new(memory);
    cpu.reset();
    cpu
}

#[test]
fn test_adc_immediate_scenario() {
    let mut cpu = setup_cpu(&[0x69, 0x0C]);
    cpu.set_a(3);
    cpu.set_flag_c(false);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.a(), 15);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_v());
}

#[test]
fn test_lda_immediate_scenario() {
    let mut cpu = setup_cpu(&[0xA9, 0x80]);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_jmp_absolute_scenario() {
    let mut cpu = setup_cpu(&[0x4C, 0x11, 0x33]);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.pc(), 0x3311);
}

#[test]
fn test_adc_absolute_x_page_cross_scenario() {
    let mut cpu = setup_cpu(&[0x7D, 0xFF, 0x00]);
    cpu.memory_mut().write(0x0100, 0x21);
    cpu.memory_mut().write(0x0000, 0xEE);
    cpu.set_x(1);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.a(), 0x21);
}

#[test]
fn test_reset_scenario() {
    let mut memory = FlatMemory::new();
    memory.write_bytes(0xFFFC, &[0x00, 0x10]);
    let mut cpu = CPU::new(memory);

    cpu.reset();

    let state = cpu.snapshot();
    assert_eq!(state.pc, 0x1000);
    assert_eq!(state.sp, 0xFD);
    assert_eq!(state.total_cycles, 8);
}

#[test]
fn test_counting_loop() {
    // LDX #$05; loop: DEX; BNE loop; STX $0200
    let mut cpu = setup_cpu(&[0xA2, 0x05, 0xCA, 0xD0, 0xFD, 0x8E, 0x00, 0x02]);
    cpu.memory_mut().write(0x0200, 0xFF);

    let cycles = cpu.run_until(false, |cpu| cpu.pc() == 0x1008).unwrap();

    // LDX 2 + 4 * (DEX 2 + BNE taken 3) + DEX 2 + BNE not taken 2 + STX 4
    assert_eq!(cycles, 2 + 4 * 5 + 2 + 2 + 4);
    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.memory().read(0x0200), 0x00);
    assert_eq!(cpu.instructions(), 1 + 5 * 2 + 1);
}

#[test]
fn test_subroutine_sum() {
    // CLC; LDA #$10; JSR add; STA $0300; JMP *
    // add: ADC #$22; RTS
    let mut cpu = setup_cpu(&[
        0x18, 0xA9, 0x10, 0x20, 0x00, 0x20, 0x8D, 0x00, 0x03, 0x4C, 0x09, 0x10,
    ]);
    cpu.memory_mut().write_bytes(0x2000, &[0x69, 0x22, 0x60]);

    cpu.run_until(false, |cpu| cpu.pc() == 0x1009).unwrap();

    assert_eq!(cpu.memory().read(0x0300), 0x32);
    assert_eq!(cpu.sp(), 0xFD);
}
