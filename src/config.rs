//! # Engine Configuration
//!
//! The only tunable is the clock rate used for real-time pacing. It never
//! changes what an instruction does or how many cycles it costs.

use std::num::NonZeroU32;

/// Default pacing rate.
///
/// Deliberately slow so a paced run can be followed instruction by
/// instruction. Unpaced execution (`step`, `run_for_cycles`, `run(false)`)
/// ignores it entirely.
pub const DEFAULT_CLOCK_HZ: NonZeroU32 = match NonZeroU32::new(1) {
    Some(hz) => hz,
    None => unreachable!(),
};

/// Configuration for a [`CPU`](crate::CPU).
///
/// # Examples
///
/// ```
/// use cycle6502::{CpuConfig, CPU, FlatMemory};
/// use std::num::NonZeroU32;
///
/// let config = CpuConfig::default().with_clock_hz(NonZeroU32::new(1_000_000).unwrap());
/// let cpu = CPU::with_config(FlatMemory::new(), config);
/// assert_eq!(cpu.snapshot().clock_hz, 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Target clock frequency for paced execution.
    pub clock_hz: NonZeroU32,
}

impl CpuConfig {
    pub const fn new(clock_hz: NonZeroU32) -> Self {
        Self { clock_hz }
    }

    pub const fn with_clock_hz(self, clock_hz: NonZeroU32) -> Self {
        Self { clock_hz }
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CLOCK_HZ)
    }
}
