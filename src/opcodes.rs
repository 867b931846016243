//! # Opcode Metadata Table
//!
//! The 256-entry table that maps every opcode byte to its instruction
//! descriptor: operation family, addressing mode, base cycle cost and encoded
//! length. It is the single source of truth for decoding and timing.
//!
//! The table is assembled at compile time from [`DEFINITIONS`]. Any byte
//! without a definition decodes to [`OpcodeMetadata::UNIMPLEMENTED`], and
//! executing it fails with
//! [`ExecutionError::UnimplementedOpcode`](crate::ExecutionError::UnimplementedOpcode).

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;

/// Operation performed by an opcode, independent of addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Load / store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,

    // Register transfers
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,

    // Arithmetic, logic and comparisons
    Adc,
    Sbc,
    And,
    Ora,
    Eor,
    Bit,
    Cmp,
    Cpx,
    Cpy,

    // Increments / decrements
    Inc,
    Inx,
    Iny,
    Dec,
    Dex,
    Dey,

    // Shifts and rotates
    Asl,
    Lsr,
    Rol,
    Ror,

    // Branches
    Bcc,
    Bcs,
    Beq,
    Bne,
    Bmi,
    Bpl,
    Bvc,
    Bvs,

    // Jumps and subroutines
    Jmp,
    Jsr,
    Rts,

    // Stack
    Pha,
    Php,
    Pla,
    Plp,

    // Status flags
    Clc,
    Sec,
    Cli,
    Sei,
    Cld,
    Sed,
    Clv,

    Nop,

    /// Sentinel for opcodes this engine does not execute.
    Unimplemented,
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use cycle6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert!(lda_imm.is_implemented());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// What the instruction does.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost, before page-crossing and branch penalties.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// Descriptor for every opcode byte without a definition.
    pub const UNIMPLEMENTED: OpcodeMetadata = OpcodeMetadata {
        mnemonic: "???",
        operation: Operation::Unimplemented,
        addressing_mode: Implicit,
        base_cycles: 0,
        size_bytes: 1,
    };

    const fn new(
        mnemonic: &'static str,
        operation: Operation,
        addressing_mode: AddressingMode,
        base_cycles: u8,
    ) -> Self {
        Self {
            mnemonic,
            operation,
            addressing_mode,
            base_cycles,
            size_bytes: addressing_mode.size_bytes(),
        }
    }

    /// Whether executing this opcode does something other than fail.
    pub const fn is_implemented(&self) -> bool {
        !matches!(self.operation, Operation::Unimplemented)
    }
}

const fn op(
    opcode: u8,
    mnemonic: &'static str,
    operation: Operation,
    mode: AddressingMode,
    cycles: u8,
) -> (u8, OpcodeMetadata) {
    (opcode, OpcodeMetadata::new(mnemonic, operation, mode, cycles))
}

/// Every documented NMOS 6502 opcode.
///
/// BRK and RTI are listed with their documented cost so the table describes
/// them, but they carry [`Operation::Unimplemented`]: interrupt entry and
/// return are outside this engine.
pub const DEFINITIONS: [(u8, OpcodeMetadata); 151] = {
    use Operation::*;
    [
        op(0x00, "BRK", Unimplemented, Implicit, 7),
        op(0x01, "ORA", Ora, IndirectX, 6),
        op(0x05, "ORA", Ora, ZeroPage, 3),
        op(0x06, "ASL", Asl, ZeroPage, 5),
        op(0x08, "PHP", Php, Implicit, 3),
        op(0x09, "ORA", Ora, Immediate, 2),
        op(0x0A, "ASL", Asl, Accumulator, 2),
        op(0x0D, "ORA", Ora, Absolute, 4),
        op(0x0E, "ASL", Asl, Absolute, 6),
        op(0x10, "BPL", Bpl, Relative, 2),
        op(0x11, "ORA", Ora, IndirectY, 5),
        op(0x15, "ORA", Ora, ZeroPageX, 4),
        op(0x16, "ASL", Asl, ZeroPageX, 6),
        op(0x18, "CLC", Clc, Implicit, 2),
        op(0x19, "ORA", Ora, AbsoluteY, 4),
        op(0x1D, "ORA", Ora, AbsoluteX, 4),
        op(0x1E, "ASL", Asl, AbsoluteX, 7),
        op(0x20, "JSR", Jsr, Absolute, 6),
        op(0x21, "AND", And, IndirectX, 6),
        op(0x24, "BIT", Bit, ZeroPage, 3),
        op(0x25, "AND", And, ZeroPage, 3),
        op(0x26, "ROL", Rol, ZeroPage, 5),
        op(0x28, "PLP", Plp, Implicit, 4),
        op(0x29, "AND", And, Immediate, 2),
        op(0x2A, "ROL", Rol, Accumulator, 2),
        op(0x2C, "BIT", Bit, Absolute, 4),
        op(0x2D, "AND", And, Absolute, 4),
        op(0x2E, "ROL", Rol, Absolute, 6),
        op(0x30, "BMI", Bmi, Relative, 2),
        op(0x31, "AND", And, IndirectY, 5),
        op(0x35, "AND", And, ZeroPageX, 4),
        op(0x36, "ROL", Rol, ZeroPageX, 6),
        op(0x38, "SEC", Sec, Implicit, 2),
        op(0x39, "AND", And, AbsoluteY, 4),
        op(0x3D, "AND", And, AbsoluteX, 4),
        op(0x3E, "ROL", Rol, AbsoluteX, 7),
        op(0x40, "RTI", Unimplemented, Implicit, 6),
        op(0x41, "EOR", Eor, IndirectX, 6),
        op(0x45, "EOR", Eor, ZeroPage, 3),
        op(0x46, "LSR", Lsr, ZeroPage, 5),
        op(0x48, "PHA", Pha, Implicit, 3),
        op(0x49, "EOR", Eor, Immediate, 2),
        op(0x4A, "LSR", Lsr, Accumulator, 2),
        op(0x4C, "JMP", Jmp, Absolute, 3),
        op(0x4D, "EOR", Eor, Absolute, 4),
        op(0x4E, "LSR", Lsr, Absolute, 6),
        op(0x50, "BVC", Bvc, Relative, 2),
        op(0x51, "EOR", Eor, IndirectY, 5),
        op(0x55, "EOR", Eor, ZeroPageX, 4),
        op(0x56, "LSR", Lsr, ZeroPageX, 6),
        op(0x58, "CLI", Cli, Implicit, 2),
        op(0x59, "EOR", Eor, AbsoluteY, 4),
        op(0x5D, "EOR", Eor, AbsoluteX, 4),
        op(0x5E, "LSR", Lsr, AbsoluteX, 7),
        op(0x60, "RTS", Rts, Implicit, 6),
        op(0x61, "ADC", Adc, IndirectX, 6),
        op(0x65, "ADC", Adc, ZeroPage, 3),
        op(0x66, "ROR", Ror, ZeroPage, 5),
        op(0x68, "PLA", Pla, Implicit, 4),
        op(0x69, "ADC", Adc, Immediate, 2),
        op(0x6A, "ROR", Ror, Accumulator, 2),
        op(0x6C, "JMP", Jmp, Indirect, 5),
        op(0x6D, "ADC", Adc, Absolute, 4),
        op(0x6E, "ROR", Ror, Absolute, 6),
        op(0x70, "BVS", Bvs, Relative, 2),
        op(0x71, "ADC", Adc, IndirectY, 5),
        op(0x75, "ADC", Adc, ZeroPageX, 4),
        op(0x76, "ROR", Ror, ZeroPageX, 6),
        op(0x78, "SEI", Sei, Implicit, 2),
        op(0x79, "ADC", Adc, AbsoluteY, 4),
        op(0x7D, "ADC", Adc, AbsoluteX, 4),
        op(0x7E, "ROR", Ror, AbsoluteX, 7),
        op(0x81, "STA", Sta, IndirectX, 6),
        op(0x84, "STY", Sty, ZeroPage, 3),
        op(0x85, "STA", Sta, ZeroPage, 3),
        op(0x86, "STX", Stx, ZeroPage, 3),
        op(0x88, "DEY", Dey, Implicit, 2),
        op(0x8A, "TXA", Txa, Implicit, 2),
        op(0x8C, "STY", Sty, Absolute, 4),
        op(0x8D, "STA", Sta, Absolute, 4),
        op(0x8E, "STX", Stx, Absolute, 4),
        op(0x90, "BCC", Bcc, Relative, 2),
        op(0x91, "STA", Sta, IndirectY, 6),
        op(0x94, "STY", Sty, ZeroPageX, 4),
        op(0x95, "STA", Sta, ZeroPageX, 4),
        op(0x96, "STX", Stx, ZeroPageY, 4),
        op(0x98, "TYA", Tya, Implicit, 2),
        op(0x99, "STA", Sta, AbsoluteY, 5),
        op(0x9A, "TXS", Txs, Implicit, 2),
        op(0x9D, "STA", Sta, AbsoluteX, 5),
        op(0xA0, "LDY", Ldy, Immediate, 2),
        op(0xA1, "LDA", Lda, IndirectX, 6),
        op(0xA2, "LDX", Ldx, Immediate, 2),
        op(0xA4, "LDY", Ldy, ZeroPage, 3),
        op(0xA5, "LDA", Lda, ZeroPage, 3),
        op(0xA6, "LDX", Ldx, ZeroPage, 3),
        op(0xA8, "TAY", Tay, Implicit, 2),
        op(0xA9, "LDA", Lda, Immediate, 2),
        op(0xAA, "TAX", Tax, Implicit, 2),
        op(0xAC, "LDY", Ldy, Absolute, 4),
        op(0xAD, "LDA", Lda, Absolute, 4),
        op(0xAE, "LDX", Ldx, Absolute, 4),
        op(0xB0, "BCS", Bcs, Relative, 2),
        op(0xB1, "LDA", Lda, IndirectY, 5),
        op(0xB4, "LDY", Ldy, ZeroPageX, 4),
        op(0xB5, "LDA", Lda, ZeroPageX, 4),
        op(0xB6, "LDX", Ldx, ZeroPageY, 4),
        op(0xB8, "CLV", Clv, Implicit, 2),
        op(0xB9, "LDA", Lda, AbsoluteY, 4),
        op(0xBA, "TSX", Tsx, Implicit, 2),
        op(0xBC, "LDY", Ldy, AbsoluteX, 4),
        op(0xBD, "LDA", Lda, AbsoluteX, 4),
        op(0xBE, "LDX", Ldx, AbsoluteY, 4),
        op(0xC0, "CPY", Cpy, Immediate, 2),
        op(0xC1, "CMP", Cmp, IndirectX, 6),
        op(0xC4, "CPY", Cpy, ZeroPage, 3),
        op(0xC5, "CMP", Cmp, ZeroPage, 3),
        op(0xC6, "DEC", Dec, ZeroPage, 5),
        op(0xC8, "INY", Iny, Implicit, 2),
        op(0xC9, "CMP", Cmp, Immediate, 2),
        op(0xCA, "DEX", Dex, Implicit, 2),
        op(0xCC, "CPY", Cpy, Absolute, 4),
        op(0xCD, "CMP", Cmp, Absolute, 4),
        op(0xCE, "DEC", Dec, Absolute, 6),
        op(0xD0, "BNE", Bne, Relative, 2),
        op(0xD1, "CMP", Cmp, IndirectY, 5),
        op(0xD5, "CMP", Cmp, ZeroPageX, 4),
        op(0xD6, "DEC", Dec, ZeroPageX, 6),
        op(0xD8, "CLD", Cld, Implicit, 2),
        op(0xD9, "CMP", Cmp, AbsoluteY, 4),
        op(0xDD, "CMP", Cmp, AbsoluteX, 4),
        op(0xDE, "DEC", Dec, AbsoluteX, 7),
        op(0xE0, "CPX", Cpx, Immediate, 2),
        op(0xE1, "SBC", Sbc, IndirectX, 6),
        op(0xE4, "CPX", Cpx, ZeroPage, 3),
        op(0xE5, "SBC", Sbc, ZeroPage, 3),
        op(0xE6, "INC", Inc, ZeroPage, 5),
        op(0xE8, "INX", Inx, Implicit, 2),
        op(0xE9, "SBC", Sbc, Immediate, 2),
        op(0xEA, "NOP", Nop, Implicit, 2),
        op(0xEC, "CPX", Cpx, Absolute, 4),
        op(0xED, "SBC", Sbc, Absolute, 4),
        op(0xEE, "INC", Inc, Absolute, 6),
        op(0xF0, "BEQ", Beq, Relative, 2),
        op(0xF1, "SBC", Sbc, IndirectY, 5),
        op(0xF5, "SBC", Sbc, ZeroPageX, 4),
        op(0xF6, "INC", Inc, ZeroPageX, 6),
        op(0xF8, "SED", Sed, Implicit, 2),
        op(0xF9, "SBC", Sbc, AbsoluteY, 4),
        op(0xFD, "SBC", Sbc, AbsoluteX, 4),
        op(0xFE, "INC", Inc, AbsoluteX, 7),
    ]
};

const fn build_table() -> [OpcodeMetadata; 256] {
    let mut table = [OpcodeMetadata::UNIMPLEMENTED; 256];
    let mut i = 0;
    while i < DEFINITIONS.len() {
        let (opcode, metadata) = DEFINITIONS[i];
        table[opcode as usize] = metadata;
        i += 1;
    }
    table
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use cycle6502::OPCODE_TABLE;
///
/// let jmp_ind = &OPCODE_TABLE[0x6C];
/// assert_eq!(jmp_ind.mnemonic, "JMP");
/// assert_eq!(jmp_ind.base_cycles, 5);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "???");
/// assert!(!illegal.is_implemented());
/// ```
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();

/// Looks up the descriptor for an opcode byte.
#[inline]
pub fn decode(opcode: u8) -> &'static OpcodeMetadata {
    &OPCODE_TABLE[opcode as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_are_unique_and_sorted() {
        for pair in DEFINITIONS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "0x{:02X} out of order", pair[1].0);
        }
    }

    #[test]
    fn test_table_matches_definitions() {
        for (opcode, metadata) in DEFINITIONS.iter() {
            assert_eq!(&OPCODE_TABLE[*opcode as usize], metadata);
        }
        let defined = OPCODE_TABLE.iter().filter(|m| m.mnemonic != "???").count();
        assert_eq!(defined, DEFINITIONS.len());
    }

    #[test]
    fn test_interrupt_opcodes_are_not_executable() {
        assert_eq!(decode(0x00).mnemonic, "BRK");
        assert!(!decode(0x00).is_implemented());
        assert_eq!(decode(0x40).mnemonic, "RTI");
        assert!(!decode(0x40).is_implemented());
    }

    #[test]
    fn test_implemented_count() {
        let implemented = OPCODE_TABLE.iter().filter(|m| m.is_implemented()).count();
        assert_eq!(implemented, 149);
    }
}
