//! # Real-Time Pacing
//!
//! `Pacer` slows a running CPU down to a target clock rate by sleeping
//! between instructions. It only observes cycle counts; it never feeds
//! anything back into execution.

use std::num::NonZeroU32;
use std::thread;
use std::time::{Duration, Instant};

/// Sleeps so that `cycles / clock_hz` seconds of wall time pass for every
/// `cycles` executed.
///
/// The schedule is anchored at the first paced instruction, so sleep jitter
/// does not accumulate. When execution falls behind schedule the pacer does
/// not sleep; it never skips work to catch up.
#[derive(Debug)]
pub struct Pacer {
    clock_hz: NonZeroU32,
    started: Option<Instant>,
    cycles: u64,
}

impl Pacer {
    pub fn new(clock_hz: NonZeroU32) -> Self {
        Self {
            clock_hz,
            started: None,
            cycles: 0,
        }
    }

    /// Forgets the current schedule; the next `pace` call starts a new one.
    pub fn restart(&mut self) {
        self.started = None;
        self.cycles = 0;
    }

    /// Wall-clock time `cycles` cycles should take at the target rate.
    pub fn duration_of(&self, cycles: u64) -> Duration {
        let hz = self.clock_hz.get() as u64;
        let secs = cycles / hz;
        let nanos = (cycles % hz) * 1_000_000_000 / hz;
        Duration::new(secs, nanos as u32)
    }

    /// Accounts for `cycles` just executed and sleeps until they are due.
    pub fn pace(&mut self, cycles: u32) {
        let started = *self.started.get_or_insert_with(Instant::now);
        self.cycles += cycles as u64;

        let due = started + self.duration_of(self.cycles);
        let now = Instant::now();
        if let Some(wait) = due.checked_duration_since(now) {
            log::trace!(target: "clock", "sleeping {:?} after {} cycles", wait, self.cycles);
            thread::sleep(wait);
        } else {
            log::debug!(
                target: "clock",
                "behind schedule by {:?} at {} cycles",
                now - due,
                self.cycles
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hz(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn test_duration_of() {
        let pacer = Pacer::new(hz(1_000_000));
        assert_eq!(pacer.duration_of(1), Duration::from_micros(1));
        assert_eq!(pacer.duration_of(2_500_000), Duration::from_millis(2500));

        let slow = Pacer::new(hz(10));
        assert_eq!(slow.duration_of(8), Duration::from_millis(800));
    }

    #[test]
    fn test_pace_waits_for_schedule() {
        let mut pacer = Pacer::new(hz(1_000));
        let start = Instant::now();
        pacer.pace(20);
        pacer.pace(20);
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_restart_resets_schedule() {
        let mut pacer = Pacer::new(hz(1_000_000));
        pacer.pace(10);
        pacer.restart();
        assert_eq!(pacer.cycles, 0);
        assert!(pacer.started.is_none());
    }
}
