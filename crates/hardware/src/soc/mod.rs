//! System-on-Chip (SoC) Components.
//!
//! This module organizes the peripherals that sample the CPU every cycle: the CRT
//! display and the signal-strength monitor.

/// Peripheral device implementations.
pub mod devices;

/// Device trait definitions.
pub mod traits;

pub use devices::{Checkpoint, Crt, SignalMonitor};
pub use traits::{Device, DeviceEvent};
