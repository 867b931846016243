//! # CPU State and Execution
//!
//! This module contains the `CPU` struct, which pairs a [`ProcessorState`]
//! with a memory bus, and the fetch-decode-execute loop that drives it.
//!
//! ## Lifecycle
//!
//! 1. `CPU::new()` builds the power-on state without touching memory
//! 2. `reset()` loads PC from the reset vector, sets S to 0xFD, costs 8 cycles
//! 3. `step()` / `run()` execute instructions one at a time
//!
//! ## Execution Model
//!
//! Each `step()` runs one instruction to completion:
//! - Fetch the opcode at PC and look it up in `OPCODE_TABLE`
//! - Resolve the operand from the bytes after the opcode
//! - Advance PC past the instruction
//! - Run the operation's semantics, which may overwrite PC (jumps, branches)
//! - Charge base cycles plus any page-cross or branch penalty
//!
//! Opcodes without semantics fail before anything is mutated.

use crate::addressing::{self, Operand};
use crate::clock::Pacer;
use crate::instructions;
use crate::opcodes::decode;
use crate::{CpuConfig, ExecutionError, MemoryBus, ProcessorState, StatusFlags};

/// Address of the little-endian reset vector (0xFFFC/0xFFFD).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Cycles charged by the reset sequence.
pub const RESET_CYCLES: u32 = 8;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
const RESET_SP: u8 = 0xFD;

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. Pass
/// `&mut memory` to keep ownership of the memory image on the caller's side.
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::with_reset_vector(0x8000);
/// memory.write_bytes(0x8000, &[0xA9, 0x80]); // LDA #$80
///
/// let mut cpu = CPU::new(&mut memory);
/// cpu.reset();
///
/// assert_eq!(cpu.step(), Ok(2));
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.flag_n());
/// assert!(!cpu.flag_z());
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) state: ProcessorState,
    pub(crate) memory: M,
    pacer: Pacer,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU in the power-on state with the default configuration.
    ///
    /// All registers, flags and counters are zero. Call [`reset`](Self::reset)
    /// before executing instructions.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU in the power-on state with an explicit configuration.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            state: ProcessorState {
                clock_hz: config.clock_hz.get(),
                ..ProcessorState::default()
            },
            memory,
            pacer: Pacer::new(config.clock_hz),
        }
    }

    /// Performs the reset sequence.
    ///
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - S is set to 0xFD
    /// - 8 cycles are charged
    ///
    /// A, X, Y and the status flags keep whatever they held.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::with_reset_vector(0x1000));
    /// cpu.reset();
    /// assert_eq!(cpu.pc(), 0x1000);
    /// assert_eq!(cpu.sp(), 0xFD);
    /// assert_eq!(cpu.cycles(), 8);
    /// ```
    pub fn reset(&mut self) {
        let vector = self.memory.read_word(RESET_VECTOR);
        log::debug!(target: "cpu", "reset: vector ${:04X}", vector);

        self.state.pc = vector;
        self.state.sp = RESET_SP;
        self.state.cycles = RESET_CYCLES;
        self.state.total_cycles += RESET_CYCLES as u64;
        self.pacer.restart();
    }

    /// Executes exactly one instruction and returns the cycles it consumed.
    ///
    /// # Errors
    ///
    /// `ExecutionError::UnimplementedOpcode` if the byte at PC has no
    /// semantics. PC, registers, memory and counters are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::with_reset_vector(0x8000);
    /// mem.write(0x8000, 0x02); // not a documented opcode
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.reset();
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::UnimplementedOpcode { opcode: 0x02, pc: 0x8000 })
    /// );
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn step(&mut self) -> Result<u32, ExecutionError> {
        let pc = self.state.pc;
        let opcode = self.memory.read(pc);
        let metadata = decode(opcode);

        if !metadata.is_implemented() {
            log::warn!(
                target: "cpu",
                "unimplemented opcode 0x{:02X} ({}) at ${:04X}",
                opcode,
                metadata.mnemonic,
                pc
            );
            return Err(ExecutionError::UnimplementedOpcode { opcode, pc });
        }

        let operand = addressing::resolve(&self.memory, &self.state, metadata.addressing_mode);
        self.state.pc = pc.wrapping_add(metadata.size_bytes as u16);

        let penalty = instructions::execute(self, metadata.operation, operand);
        debug_assert!(penalty <= 2, "{} charged {} penalty cycles", metadata.mnemonic, penalty);
        let cycles = metadata.base_cycles as u32 + penalty;

        self.state.cycles = cycles;
        self.state.total_cycles += cycles as u64;
        self.state.total_instructions += 1;

        log::trace!(
            target: "cpu",
            "${:04X} {:02X} {} {:?} cycles={} A={:02X} X={:02X} Y={:02X} S={:02X} P={:02X}",
            pc,
            opcode,
            metadata.mnemonic,
            operand,
            cycles,
            self.state.a,
            self.state.x,
            self.state.y,
            self.state.sp,
            self.state.flags.to_byte()
        );

        Ok(cycles)
    }

    /// Executes instructions until one fails.
    ///
    /// With `paced` set, sleeps between instructions so execution tracks the
    /// configured clock rate. Pacing never changes results.
    pub fn run(&mut self, paced: bool) -> Result<u64, ExecutionError> {
        self.run_until(paced, |_| false)
    }

    /// Executes instructions until `stop` returns true or an instruction fails.
    ///
    /// `stop` is checked before every instruction. Returns the cycles executed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::with_reset_vector(0x8000);
    /// mem.write_bytes(0x8000, &[0xE8, 0xE8, 0xE8, 0x4C, 0x03, 0x80]); // INX x3; JMP *
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.reset();
    /// let cycles = cpu.run_until(false, |cpu| cpu.pc() == 0x8003).unwrap();
    /// assert_eq!(cycles, 6);
    /// assert_eq!(cpu.x(), 3);
    /// ```
    pub fn run_until<F>(&mut self, paced: bool, mut stop: F) -> Result<u64, ExecutionError>
    where
        F: FnMut(&Self) -> bool,
    {
        let start_cycles = self.state.total_cycles;
        if paced {
            self.pacer.restart();
        }

        while !stop(&*self) {
            let cycles = self.step()?;
            if paced {
                self.pacer.pace(cycles);
            }
        }

        Ok(self.state.total_cycles - start_cycles)
    }

    /// Runs the CPU, unpaced, for at least `cycle_budget` cycles.
    ///
    /// Whole instructions are executed, so the result may overshoot the
    /// budget by up to one instruction.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let target_cycles = self.state.total_cycles + cycle_budget;
        self.run_until(false, |cpu| cpu.state.total_cycles >= target_cycles)
    }

    /// Returns a copy of registers, flags and counters.
    pub fn snapshot(&self) -> ProcessorState {
        self.state
    }

    // ========== Memory Access ==========

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands back its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.state.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.state.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.state.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The next free stack slot is 0x0100 + SP. The stack grows downward.
    pub fn sp(&self) -> u8 {
        self.state.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 set).
    pub fn status(&self) -> u8 {
        self.state.flags.to_byte()
    }

    /// Returns the status flags.
    pub fn flags(&self) -> StatusFlags {
        self.state.flags
    }

    /// Returns the total number of cycles executed since power-on.
    pub fn cycles(&self) -> u64 {
        self.state.total_cycles
    }

    /// Returns the number of instructions executed since power-on.
    pub fn instructions(&self) -> u64 {
        self.state.total_instructions
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.state.flags.negative
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.state.flags.overflow
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.state.flags.break_command
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.state.flags.decimal
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.state.flags.interrupt_disable
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.state.flags.zero
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.state.flags.carry
    }

    // ========== Setters (test and harness setup) ==========

    pub fn set_a(&mut self, value: u8) {
        self.state.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.state.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.state.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.state.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.state.sp = value;
    }

    /// Unpacks all seven flags, B included, from a status byte.
    pub fn set_status(&mut self, status: u8) {
        self.state.flags = StatusFlags::from_byte(status);
    }

    pub fn set_flags(&mut self, flags: StatusFlags) {
        self.state.flags = flags;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.state.flags.negative = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.state.flags.overflow = value;
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.state.flags.break_command = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.state.flags.decimal = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.state.flags.interrupt_disable = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.state.flags.zero = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.state.flags.carry = value;
    }

    // ========== Helpers shared by instruction semantics ==========

    /// Writes at 0x0100 + S, then decrements S.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.state.sp as u16, value);
        self.state.sp = self.state.sp.wrapping_sub(1);
    }

    /// Increments S, then reads at 0x0100 + S.
    pub(crate) fn pull(&mut self) -> u8 {
        self.state.sp = self.state.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.state.sp as u16)
    }

    /// Pushes a word high byte first, so it sits little-endian on the stack.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull();
        let hi = self.pull();
        u16::from_le_bytes([lo, hi])
    }

    /// Reads the value a read instruction operates on.
    ///
    /// Returns the value and the cycle penalty: 1 when indexing crossed a
    /// page, 0 otherwise.
    pub(crate) fn read_operand(&self, operand: Operand) -> (u8, u32) {
        match operand {
            Operand::Immediate(value) => (value, 0),
            Operand::Accumulator => (self.state.a, 0),
            Operand::Address { addr, page_crossed } => {
                (self.memory.read(addr), page_crossed as u32)
            }
            Operand::Implied | Operand::Relative(_) => {
                unreachable!("{:?} has no value to read", operand)
            }
        }
    }

    /// Writes the result of a read-modify-write or store instruction.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.state.a = value,
            Operand::Address { addr, .. } => self.memory.write(addr, value),
            Operand::Implied | Operand::Immediate(_) | Operand::Relative(_) => {
                unreachable!("{:?} cannot be written", operand)
            }
        }
    }
}
