//! Single-register CPU and CRT simulator library.
//!
//! This crate simulates a toy CPU with one register, `x`, running a two-instruction
//! assembly language (`noop`, `addx`), and the peripherals that watch it:
//! 1. **ISA:** Opcode table, line decoder and per-cycle execution state.
//! 2. **Core:** The CPU stepper, which wraps the program around when it runs out.
//! 3. **SoC:** The 40x6 scanning CRT and the signal-strength (checksum) monitor.
//! 4. **Simulation:** Program loader, run loop, run limits and observers.
//! 5. **Configuration and statistics.**
//!
//! ```
//! use crtsim_core::sim::{NullObserver, Program, RunLimit, Simulator};
//! use crtsim_core::Config;
//!
//! let program: Program = "noop\naddx 3\naddx -5".parse().unwrap();
//! let mut sim = Simulator::new(program, &Config::default()).unwrap();
//! let summary = sim.run_checksum(RunLimit::Cycles(3), &mut NullObserver);
//! assert_eq!(summary.registers.x, 4);
//! ```

/// Common types and constants (registers, errors, machine geometry).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (register file, stepper, wrap-around).
pub mod core;
/// Instruction set (opcodes, decode, execution state).
pub mod isa;
/// Program loader, simulator and observers.
pub mod sim;
/// Peripherals (CRT, signal monitor) and the device trait.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, program and stats.
pub use crate::core::Cpu;
/// Top-level simulator owning the CPU and peripherals.
pub use crate::sim::Simulator;
