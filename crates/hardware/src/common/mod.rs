//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by the ISA, the CPU stepper and the
//! display. It includes:
//! 1. **Constants:** Machine geometry, opcode costs and checksum checkpoints.
//! 2. **Error Handling:** Program parse errors and top-level simulation errors.
//! 3. **Register Management:** The single-register architectural state.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for program loading and simulation.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{CRT_HEIGHT, CRT_WIDTH, INITIAL_X};
pub use error::{ParseError, SimError};
pub use reg::Registers;
