//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the decoded instruction type and the per-cycle execution
//! contract for the two-instruction machine.
//!
//! # Instructions
//!
//! * `noop`: 1 cycle, no effect.
//! * `addx V`: 2 cycles, then `x += V`.

/// Text decoder turning program lines into instructions.
pub mod decode;

/// In-flight execution state (remaining-cycle counters).
pub mod exec;

/// Opcode table and the decoded instruction type.
pub mod instruction;

pub use decode::decode_line;
pub use exec::InFlight;
pub use instruction::{Instruction, Opcode};
