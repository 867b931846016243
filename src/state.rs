//! # Processor State
//!
//! Plain data describing the register file, the seven status flags and the
//! cycle accounting counters. The engine mutates it; callers get copies of it
//! through [`CPU::snapshot`](crate::CPU::snapshot).

use crate::config::DEFAULT_CLOCK_HZ;

/// Bit positions of the packed status byte (NV-BDIZC).
pub mod status_bits {
    pub const CARRY: u8 = 1 << 0;
    pub const ZERO: u8 = 1 << 1;
    pub const INTERRUPT_DISABLE: u8 = 1 << 2;
    pub const DECIMAL: u8 = 1 << 3;
    pub const BREAK: u8 = 1 << 4;
    pub const UNUSED: u8 = 1 << 5;
    pub const OVERFLOW: u8 = 1 << 6;
    pub const NEGATIVE: u8 = 1 << 7;
}

/// The seven 6502 condition flags.
///
/// Decimal is stored and can be pushed/pulled, but arithmetic is always binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags {
    /// C: unsigned carry/borrow out of bit 7
    pub carry: bool,
    /// Z: last result was zero
    pub zero: bool,
    /// I: IRQ masking, stored only
    pub interrupt_disable: bool,
    /// D: decimal mode, stored only
    pub decimal: bool,
    /// B: break command
    pub break_command: bool,
    /// V: signed overflow
    pub overflow: bool,
    /// N: bit 7 of last result
    pub negative: bool,
}

impl StatusFlags {
    /// Packs the flags into a status byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::StatusFlags;
    ///
    /// let flags = StatusFlags { carry: true, negative: true, ..StatusFlags::default() };
    /// assert_eq!(flags.to_byte(), 0b1010_0001);
    /// ```
    pub fn to_byte(self) -> u8 {
        use status_bits::*;

        [
            (self.negative, NEGATIVE),
            (self.overflow, OVERFLOW),
            (self.break_command, BREAK),
            (self.decimal, DECIMAL),
            (self.interrupt_disable, INTERRUPT_DISABLE),
            (self.zero, ZERO),
            (self.carry, CARRY),
        ]
        .iter()
        .filter(|(set, _)| *set)
        .fold(UNUSED, |status, (_, bit)| status | bit)
    }

    /// Unpacks every flag, including B, from a status byte. Bit 5 is ignored.
    pub fn from_byte(status: u8) -> Self {
        use status_bits::*;

        Self {
            carry: status & CARRY != 0,
            zero: status & ZERO != 0,
            interrupt_disable: status & INTERRUPT_DISABLE != 0,
            decimal: status & DECIMAL != 0,
            break_command: status & BREAK != 0,
            overflow: status & OVERFLOW != 0,
            negative: status & NEGATIVE != 0,
        }
    }

    /// Restores flags from a byte pulled off the stack.
    ///
    /// Bits 4 and 5 only exist on the stack, so the B flag keeps its
    /// current value.
    pub fn restore_from_stack(&mut self, status: u8) {
        let break_command = self.break_command;
        *self = Self::from_byte(status);
        self.break_command = break_command;
    }

    /// Sets Z and N from an 8-bit result.
    #[inline]
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.zero = value == 0;
        self.negative = value & 0x80 != 0;
    }
}

/// Registers, flags and counters of one processor.
///
/// `A`, `X`, `Y` and `S` are `u8` and `PC` is `u16`, so the width invariants
/// hold by construction; all arithmetic on them wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorState {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Stack pointer; the next free slot is 0x0100 + sp
    pub sp: u8,
    /// Program counter
    pub pc: u16,
    /// Status flags
    pub flags: StatusFlags,
    /// Cycles consumed by the most recent instruction (or reset)
    pub cycles: u32,
    /// Cycles consumed since power-on
    pub total_cycles: u64,
    /// Instructions completed since power-on
    pub total_instructions: u64,
    /// Target clock rate, only used for real-time pacing
    pub clock_hz: u32,
}

impl Default for ProcessorState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0,
            pc: 0,
            flags: StatusFlags::default(),
            cycles: 0,
            total_cycles: 0,
            total_instructions: 0,
            clock_hz: DEFAULT_CLOCK_HZ.get(),
        }
    }
}
