//! # Memory Bus Abstraction
//!
//! The engine never owns a particular memory layout. It talks to a
//! byte-addressable 64KB store through the `MemoryBus` trait, and this module
//! provides `FlatMemory`, a plain 64KB RAM image used by tests and harnesses.
//!
//! ## Addressing Rules
//!
//! - Addresses are `u16`, so every address is in range by construction
//! - Multi-byte reads are little-endian
//! - The second byte of a word read wraps at 0xFFFF independently of the first
//!
//! Zero-page and `JMP ($xxFF)` wraparound quirks are *not* the bus's job; the
//! addressing-mode resolver masks those addresses before it reaches the bus.

/// Memory bus trait for the CPU to read/write bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use cycle6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// mem.write_bytes(0x2000, &[0x34, 0x12]);
/// assert_eq!(mem.read_word(0x2000), 0x1234);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cycle6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         // Writes to ROM are silently ignored
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word from `addr` and `addr + 1`.
    ///
    /// The high-byte address wraps from 0xFFFF to 0x0000 on its own, so a
    /// word read at 0xFFFF takes its high byte from 0x0000.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFF, 0xCD);
    /// mem.write(0x0000, 0xAB);
    /// assert_eq!(mem.read_word(0xFFFF), 0xABCD);
    /// ```
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr);
        let hi = self.read(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// Intended for test and harness setup (loading programs, vectors), not
    /// for use by instruction semantics. Addresses wrap past 0xFFFF.
    fn write_bytes(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }
}

impl<T: MemoryBus + ?Sized> MemoryBus for &mut T {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are mapped to one contiguous RAM array initialized to
/// zero.
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::with_reset_vector(0x8000);
/// memory.write(0x8000, 0xEA); // NOP
///
/// let mut cpu = CPU::new(memory);
/// cpu.reset();
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Creates zeroed memory whose reset vector (0xFFFC/0xFFFD) points at `entry`.
    pub fn with_reset_vector(entry: u16) -> Self {
        let mut memory = Self::new();
        memory.write_bytes(crate::cpu::RESET_VECTOR, &entry.to_le_bytes());
        memory
    }

    /// Returns the whole 64KB image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
