//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that arithmetic, stack and cycle
//! accounting laws hold across all input combinations.

use cycle6502::{ExecutionError, FlatMemory, MemoryBus, CPU, OPCODE_TABLE};
use proptest::prelude::*;

/// Helper function to create a reset CPU executing from 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::with_reset_vector(0x8000));
    cpu.reset();
    cpu
}

/// Runs `program` from 0x8000 until PC reaches its end
fn run_program(cpu: &mut CPU<FlatMemory>, program: &[u8]) {
    cpu.memory_mut().write_bytes(0x8000, program);
    let end = 0x8000 + program.len() as u16;
    cpu.run_until(false, |cpu| cpu.pc() == end).unwrap();
}

proptest! {
    /// Adding b and then subtracting b gives back a.
    #[test]
    fn prop_adc_sbc_round_trip(a in any::<u8>(), b in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_a(a);
        // CLC; ADC #b; SEC; SBC #b
        run_program(&mut cpu, &[0x18, 0x69, b, 0x38, 0xE9, b]);

        prop_assert_eq!(cpu.a(), a);
    }

    /// ADC matches wide integer arithmetic for both C and V.
    #[test]
    fn prop_adc_flags(a in any::<u8>(), b in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu();
        cpu.set_a(a);
        cpu.set_flag_c(carry);
        run_program(&mut cpu, &[0x69, b]);

        let unsigned = a as u16 + b as u16 + carry as u16;
        let signed = a as i8 as i16 + b as i8 as i16 + carry as i16;

        prop_assert_eq!(cpu.a(), unsigned as u8);
        prop_assert_eq!(cpu.flag_c(), unsigned > 0xFF);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
        prop_assert_eq!(cpu.flag_z(), unsigned as u8 == 0);
        prop_assert_eq!(cpu.flag_n(), unsigned & 0x80 != 0);
    }

    /// SBC #b behaves exactly like ADC #!b.
    #[test]
    fn prop_sbc_is_adc_of_complement(a in any::<u8>(), b in any::<u8>(), carry in any::<bool>()) {
        let mut sbc = setup_cpu();
        sbc.set_a(a);
        sbc.set_flag_c(carry);
        run_program(&mut sbc, &[0xE9, b]);

        let mut adc = setup_cpu();
        adc.set_a(a);
        adc.set_flag_c(carry);
        run_program(&mut adc, &[0x69, !b]);

        prop_assert_eq!(sbc.a(), adc.a());
        prop_assert_eq!(sbc.flags(), adc.flags());
    }

    /// SBC borrow semantics: with C set, C afterwards means a >= b.
    #[test]
    fn prop_sbc_borrow(a in any::<u8>(), b in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_a(a);
        cpu.set_flag_c(true);
        run_program(&mut cpu, &[0xE9, b]);

        prop_assert_eq!(cpu.a(), a.wrapping_sub(b));
        prop_assert_eq!(cpu.flag_c(), a >= b);
    }

    /// CMP sets flags from the unsigned comparison and leaves A alone.
    #[test]
    fn prop_cmp_flags(a in any::<u8>(), b in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_a(a);
        run_program(&mut cpu, &[0xC9, b]);

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.flag_c(), a >= b);
        prop_assert_eq!(cpu.flag_z(), a == b);
        prop_assert_eq!(cpu.flag_n(), a.wrapping_sub(b) & 0x80 != 0);
    }

    /// Push then pull restores both the value and S, from any starting S.
    #[test]
    fn prop_stack_round_trip(value in any::<u8>(), sp in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_sp(sp);
        cpu.set_a(value);
        // PHA; LDA #$00; PLA
        run_program(&mut cpu, &[0x48, 0xA9, 0x00, 0x68]);

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.sp(), sp);
        prop_assert_eq!(cpu.memory().read(0x0100 | sp as u16), value);
    }

    /// PHP then PLP restores every flag.
    #[test]
    fn prop_php_plp_round_trip(status in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_status(status);
        let before = cpu.flags();
        // PHP; LDA #$00; CLC; CLV; PLP
        run_program(&mut cpu, &[0x08, 0xA9, 0x00, 0x18, 0xB8, 0x28]);

        prop_assert_eq!(cpu.flags(), before);
    }

    /// Every step either accounts its cycles exactly or fails without change.
    #[test]
    fn prop_step_cycle_accounting(
        opcode in any::<u8>(),
        operands in any::<[u8; 2]>(),
        a in any::<u8>(),
        x in any::<u8>(),
        y in any::<u8>(),
        status in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write_bytes(0x8000, &[opcode, operands[0], operands[1]]);
        cpu.set_a(a);
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.set_status(status);
        let before = cpu.snapshot();
        let metadata = &OPCODE_TABLE[opcode as usize];

        match cpu.step() {
            Ok(cycles) => {
                prop_assert!(metadata.is_implemented());
                prop_assert!(cycles >= metadata.base_cycles as u32);
                prop_assert!(cycles <= metadata.base_cycles as u32 + 2);

                let after = cpu.snapshot();
                prop_assert_eq!(after.cycles, cycles);
                prop_assert_eq!(after.total_cycles, before.total_cycles + cycles as u64);
                prop_assert_eq!(after.total_instructions, before.total_instructions + 1);
            }
            Err(err) => {
                prop_assert!(!metadata.is_implemented());
                prop_assert_eq!(err, ExecutionError::UnimplementedOpcode { opcode, pc: 0x8000 });
                prop_assert_eq!(cpu.snapshot(), before);
            }
        }
    }
}
