//! Core processor implementation.
//!
//! This module contains the CPU stepper: the single-register architectural state plus
//! the sequencer that walks the program one cycle at a time and wraps it around.

/// CPU core implementation and cycle stepping.
pub mod cpu;

pub use self::cpu::Cpu;
