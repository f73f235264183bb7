//! Signal-strength monitor.
//!
//! Samples `x` at a fixed set of 1-based cycles and accumulates `x * cycle` into a
//! running sum (the checksum).

use serde::Serialize;

use crate::common::Registers;
use crate::soc::traits::{Device, DeviceEvent};

/// One sampled checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Checkpoint {
    /// 1-based cycle the sample was taken during.
    pub cycle: u64,
    /// Register snapshot during that cycle.
    pub registers: Registers,
    /// `x * cycle`.
    pub signal_strength: i64,
    /// Sum of all signal strengths so far, this one included.
    pub running_sum: i64,
}

/// Checksum accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalMonitor {
    checkpoints: Vec<u64>,
    sum: i64,
    last_cycle: u64,
}

impl SignalMonitor {
    /// Creates a monitor sampling at `checkpoints` (any order, duplicates ignored).
    pub fn new(checkpoints: &[u64]) -> Self {
        let mut checkpoints = checkpoints.to_vec();
        checkpoints.sort_unstable();
        checkpoints.dedup();
        Self {
            checkpoints,
            sum: 0,
            last_cycle: 0,
        }
    }

    /// Sorted checkpoint cycles.
    pub fn checkpoints(&self) -> &[u64] {
        &self.checkpoints
    }

    /// Running sum of signal strengths.
    pub const fn sum(&self) -> i64 {
        self.sum
    }

    /// Samples cycle `cycle`; accumulates if it is a checkpoint.
    pub fn sample(&mut self, cycle: u64, regs: &Registers) -> Option<Checkpoint> {
        self.last_cycle = self.last_cycle.max(cycle);
        if self.checkpoints.binary_search(&cycle).is_err() {
            return None;
        }

        let signal_strength = regs.x.saturating_mul(cycle as i64);
        self.sum = self.sum.saturating_add(signal_strength);
        tracing::debug!(cycle, x = regs.x, signal_strength, sum = self.sum, "checkpoint");
        Some(Checkpoint {
            cycle,
            registers: *regs,
            signal_strength,
            running_sum: self.sum,
        })
    }
}

impl Device for SignalMonitor {
    fn name(&self) -> &str {
        "SIGNAL"
    }

    fn tick(&mut self, cycle: u64, regs: &Registers) -> Option<DeviceEvent> {
        self.sample(cycle, regs).map(DeviceEvent::Checkpoint)
    }

    fn reset(&mut self) {
        self.sum = 0;
        self.last_cycle = 0;
    }

    fn is_idle(&self) -> bool {
        self.checkpoints
            .last()
            .is_none_or(|&last| self.last_cycle >= last)
    }
}
