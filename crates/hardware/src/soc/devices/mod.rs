//! Peripheral Devices.
//!
//! This module contains the devices sampled by the run loop: the scanning CRT and the
//! signal-strength monitor used for the checksum.

/// 40x6 scanning CRT display.
pub mod crt;

/// Signal-strength checkpoint monitor.
pub mod signal;

pub use crt::{Crt, sprite_covers};
pub use signal::{Checkpoint, SignalMonitor};

pub use crate::soc::traits::Device;
