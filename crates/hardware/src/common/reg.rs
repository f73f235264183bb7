//! Register File.
//!
//! This module provides the `Registers` struct, the complete architectural state of the
//! simulated CPU. It provides:
//! 1. **Storage:** The single signed integer register `x`.
//! 2. **Initialization:** Power-on value configurable per run.
//! 3. **Observability:** A compact `{ x: N }` rendering used in checkpoint reports.

use std::fmt;

use serde::Serialize;

use super::constants::INITIAL_X;

/// Architectural register state.
///
/// Only `addx` writes to `x`; every other component reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Registers {
    /// The accumulator, also used as the CRT sprite center.
    pub x: i64,
}

impl Registers {
    /// Creates a register file with `x` set to `initial_x`.
    ///
    /// # Arguments
    ///
    /// * `initial_x` - Power-on value of `x`.
    pub const fn new(initial_x: i64) -> Self {
        Self { x: initial_x }
    }

    /// Restores `x` to `initial_x`.
    pub const fn reset(&mut self, initial_x: i64) {
        self.x = initial_x;
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new(INITIAL_X)
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ x: {} }}", self.x)
    }
}
