//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver
//! that turns a mode plus the bytes following an opcode into an [`Operand`].
//!
//! Resolution is where most of the timing quirks live:
//!
//! - Zero page indexed modes wrap inside page zero, never into page one
//! - `(zp,X)` and `(zp),Y` fetch their pointer high byte from `zp + 1` wrapped
//!   inside page zero
//! - Absolute indexed and `(zp),Y` report a page crossing when indexing
//!   changes the high byte of the address (one extra cycle for reads)
//! - `JMP ($xxFF)` fetches the target high byte from `$xx00`, not the next page

use crate::memory::MemoryBus;
use crate::state::ProcessorState;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// of the next instruction.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: `(zp,X)`. X is added to the pointer inside page zero,
    /// then the 16-bit address is read from there.
    IndirectX,

    /// Indirect indexed: `(zp),Y`. The 16-bit address is read from the zero
    /// page pointer, then Y is added with full 16-bit wraparound.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Encoded instruction length in bytes, opcode included.
    pub const fn size_bytes(self) -> u8 {
        1 + self.operand_bytes()
    }
}

/// A resolved instruction operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (implied addressing).
    Implied,

    /// The accumulator is the operand.
    Accumulator,

    /// An immediate byte taken from the instruction stream.
    Immediate(u8),

    /// An effective memory address.
    ///
    /// `page_crossed` is true when indexing moved the address onto a
    /// different page than the unindexed base.
    Address { addr: u16, page_crossed: bool },

    /// A signed branch displacement.
    Relative(i8),
}

impl Operand {
    fn address(addr: u16) -> Self {
        Operand::Address {
            addr,
            page_crossed: false,
        }
    }

    fn indexed(base: u16, index: u8) -> Self {
        let addr = base.wrapping_add(index as u16);
        Operand::Address {
            addr,
            page_crossed: page_crossed(base, addr),
        }
    }
}

/// Returns true when `a` and `b` lie on different 256-byte pages.
pub const fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Reads a pointer from page zero; the high byte comes from `zp + 1`
/// wrapped inside page zero.
fn zero_page_word<M: MemoryBus>(memory: &M, zp: u8) -> u16 {
    let lo = memory.read(zp as u16);
    let hi = memory.read(zp.wrapping_add(1) as u16);
    u16::from_le_bytes([lo, hi])
}

/// Resolves the operand of the instruction whose opcode sits at `state.pc`.
///
/// Operand bytes are read from `pc + 1` and `pc + 2`. Nothing is written and
/// no register is modified, so resolution can be repeated safely for
/// tracing and tests.
pub fn resolve<M: MemoryBus>(memory: &M, state: &ProcessorState, mode: AddressingMode) -> Operand {
    let pc = state.pc;
    let byte = || memory.read(pc.wrapping_add(1));
    let word = || memory.read_word(pc.wrapping_add(1));

    match mode {
        AddressingMode::Implicit => Operand::Implied,
        AddressingMode::Accumulator => Operand::Accumulator,
        AddressingMode::Immediate => Operand::Immediate(byte()),
        AddressingMode::Relative => Operand::Relative(byte() as i8),

        AddressingMode::ZeroPage => Operand::address(byte() as u16),
        AddressingMode::ZeroPageX => Operand::address(byte().wrapping_add(state.x) as u16),
        AddressingMode::ZeroPageY => Operand::address(byte().wrapping_add(state.y) as u16),

        AddressingMode::Absolute => Operand::address(word()),
        AddressingMode::AbsoluteX => Operand::indexed(word(), state.x),
        AddressingMode::AbsoluteY => Operand::indexed(word(), state.y),

        AddressingMode::Indirect => {
            let ptr = word();
            // NMOS bug: the high byte is fetched without carrying into the page
            let hi_ptr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
            let target = u16::from_le_bytes([memory.read(ptr), memory.read(hi_ptr)]);
            Operand::address(target)
        }

        AddressingMode::IndirectX => {
            let zp = byte().wrapping_add(state.x);
            Operand::address(zero_page_word(memory, zp))
        }

        AddressingMode::IndirectY => {
            let base = zero_page_word(memory, byte());
            Operand::indexed(base, state.y)
        }
    }
}
