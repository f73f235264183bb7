//! Device trait for cycle-sampled peripherals.
//!
//! This module defines the `Device` trait implemented by every peripheral. It provides:
//! 1. **Identification:** `name` for logs and reports.
//! 2. **Sampling:** `tick`, called once per cycle with the register state *during* that
//!    cycle, before the CPU steps.
//! 3. **Lifecycle:** `reset` back to power-on state and `is_idle` for run loops that
//!    can stop early.

use crate::common::Registers;
use crate::soc::devices::Checkpoint;

/// Output produced by a device on a given cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// A checksum checkpoint was sampled.
    Checkpoint(Checkpoint),
    /// The CRT finished a row.
    Row {
        /// 0-based row index within the frame.
        index: usize,
        /// The row's glyphs, left to right.
        pixels: String,
    },
}

/// Trait for peripherals driven by the CPU clock.
pub trait Device {
    /// Returns a short name for this device (e.g., `"CRT"`).
    fn name(&self) -> &str;

    /// Samples the CPU for one cycle.
    ///
    /// # Arguments
    ///
    /// * `cycle` - 1-based number of the cycle being sampled.
    /// * `regs` - Register state during the cycle.
    fn tick(&mut self, cycle: u64, regs: &Registers) -> Option<DeviceEvent>;

    /// Returns the device to power-on state.
    fn reset(&mut self);

    /// Whether further ticks can no longer produce events.
    fn is_idle(&self) -> bool {
        false
    }
}
