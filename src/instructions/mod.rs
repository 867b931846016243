//! # 6502 Instruction Implementations
//!
//! This module contains the semantics of every implemented instruction,
//! organized by category. Each instruction is a standalone function that
//! takes the CPU and the already-resolved operand, and returns the extra
//! cycles it incurred on top of the opcode's base cost.
//!
//! By the time a handler runs, PC already points at the next instruction.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::addressing::Operand;
use crate::{MemoryBus, Operation, CPU};

/// Runs the semantics of `operation` and returns the penalty cycles.
///
/// `Operation::Unimplemented` is rejected by `CPU::step` before the operand
/// is resolved, so reaching it here is an engine bug.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, operation: Operation, operand: Operand) -> u32 {
    match operation {
        Operation::Lda => load_store::execute_lda(cpu, operand),
        Operation::Ldx => load_store::execute_ldx(cpu, operand),
        Operation::Ldy => load_store::execute_ldy(cpu, operand),
        Operation::Sta => load_store::execute_sta(cpu, operand),
        Operation::Stx => load_store::execute_stx(cpu, operand),
        Operation::Sty => load_store::execute_sty(cpu, operand),

        Operation::Tax => transfer::execute_tax(cpu),
        Operation::Tay => transfer::execute_tay(cpu),
        Operation::Tsx => transfer::execute_tsx(cpu),
        Operation::Txa => transfer::execute_txa(cpu),
        Operation::Txs => transfer::execute_txs(cpu),
        Operation::Tya => transfer::execute_tya(cpu),

        Operation::Adc => alu::execute_adc(cpu, operand),
        Operation::Sbc => alu::execute_sbc(cpu, operand),
        Operation::And => alu::execute_and(cpu, operand),
        Operation::Ora => alu::execute_ora(cpu, operand),
        Operation::Eor => alu::execute_eor(cpu, operand),
        Operation::Bit => alu::execute_bit(cpu, operand),
        Operation::Cmp => alu::execute_cmp(cpu, operand),
        Operation::Cpx => alu::execute_cpx(cpu, operand),
        Operation::Cpy => alu::execute_cpy(cpu, operand),

        Operation::Inc => inc_dec::execute_inc(cpu, operand),
        Operation::Inx => inc_dec::execute_inx(cpu),
        Operation::Iny => inc_dec::execute_iny(cpu),
        Operation::Dec => inc_dec::execute_dec(cpu, operand),
        Operation::Dex => inc_dec::execute_dex(cpu),
        Operation::Dey => inc_dec::execute_dey(cpu),

        Operation::Asl => shifts::execute_asl(cpu, operand),
        Operation::Lsr => shifts::execute_lsr(cpu, operand),
        Operation::Rol => shifts::execute_rol(cpu, operand),
        Operation::Ror => shifts::execute_ror(cpu, operand),

        Operation::Bcc => branches::execute_bcc(cpu, operand),
        Operation::Bcs => branches::execute_bcs(cpu, operand),
        Operation::Beq => branches::execute_beq(cpu, operand),
        Operation::Bne => branches::execute_bne(cpu, operand),
        Operation::Bmi => branches::execute_bmi(cpu, operand),
        Operation::Bpl => branches::execute_bpl(cpu, operand),
        Operation::Bvc => branches::execute_bvc(cpu, operand),
        Operation::Bvs => branches::execute_bvs(cpu, operand),

        Operation::Jmp => control::execute_jmp(cpu, operand),
        Operation::Jsr => control::execute_jsr(cpu, operand),
        Operation::Rts => control::execute_rts(cpu),
        Operation::Nop => control::execute_nop(),

        Operation::Pha => stack::execute_pha(cpu),
        Operation::Php => stack::execute_php(cpu),
        Operation::Pla => stack::execute_pla(cpu),
        Operation::Plp => stack::execute_plp(cpu),

        Operation::Clc => flags::execute_clc(cpu),
        Operation::Sec => flags::execute_sec(cpu),
        Operation::Cli => flags::execute_cli(cpu),
        Operation::Sei => flags::execute_sei(cpu),
        Operation::Cld => flags::execute_cld(cpu),
        Operation::Sed => flags::execute_sed(cpu),
        Operation::Clv => flags::execute_clv(cpu),

        Operation::Unimplemented => unreachable!("unimplemented opcodes are rejected before dispatch"),
    }
}

/// Effective address of a memory operand.
fn effective_address(operand: Operand) -> u16 {
    match operand {
        Operand::Address { addr, .. } => addr,
        _ => unreachable!("{:?} has no effective address", operand),
    }
}
