//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file and the instruction index.
//! 2. **Program Sequencing:** Holds the parsed program and the fresh in-flight copy
//!    being consumed during the current pass.
//! 3. **Statistics:** Owns the counters updated every cycle.

/// Cycle stepping and program wrap-around.
pub mod execution;

use crate::common::Registers;
use crate::config::Config;
use crate::isa::exec::InFlight;
use crate::sim::loader::Program;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
///
/// The CPU owns its program; there is no process-wide state, so any number of CPUs can
/// run side by side (one per test, for instance).
#[derive(Debug, Clone)]
pub struct Cpu {
    /// Architectural registers.
    pub regs: Registers,
    /// Simulation statistics.
    pub stats: SimStats,

    program: Program,
    loaded: Vec<InFlight>,
    ip: usize,
    passes: u64,

    initial_x: i64,
    reset_on_wrap: bool,
    trace: bool,
}

impl Cpu {
    /// Creates a CPU at power-on state with `program` loaded.
    ///
    /// # Arguments
    ///
    /// * `program` - Parsed program to execute.
    /// * `config` - Supplies the initial `x`, wrap-around and tracing behavior.
    pub fn new(program: Program, config: &Config) -> Self {
        let loaded = load(&program);
        Self {
            regs: Registers::new(config.cpu.initial_x),
            stats: SimStats::default(),
            program,
            loaded,
            ip: 0,
            passes: 0,
            initial_x: config.cpu.initial_x,
            reset_on_wrap: config.cpu.reset_registers_on_wrap,
            trace: config.general.trace_instructions,
        }
    }

    /// Returns the CPU to power-on state, keeping the program.
    pub fn reset(&mut self) {
        self.regs.reset(self.initial_x);
        self.loaded = load(&self.program);
        self.ip = 0;
        self.passes = 0;
        self.stats = SimStats::default();
    }

    /// The parsed program.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Index of the instruction currently executing.
    pub const fn ip(&self) -> usize {
        self.ip
    }

    /// Completed passes through the program.
    pub const fn passes(&self) -> u64 {
        self.passes
    }

    /// The instruction currently executing, with its remaining cycles.
    pub fn current(&self) -> Option<&InFlight> {
        self.loaded.get(self.ip)
    }

    /// Prints the architectural state to stdout.
    pub fn dump_state(&self) {
        println!(
            "ip={:<5} pass={:<4} x={:<6} current={}",
            self.ip,
            self.passes,
            self.regs.x,
            self.current()
                .map_or_else(|| "-".to_string(), |f| format!("{} ({} left)", f.instruction(), f.remaining()))
        );
    }
}

/// Builds fresh in-flight state (full cycle counters) for every instruction.
fn load(program: &Program) -> Vec<InFlight> {
    program
        .instructions()
        .iter()
        .copied()
        .map(InFlight::new)
        .collect()
}
