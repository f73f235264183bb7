//! Simulation statistics collection and reporting.
//!
//! This module tracks counters for a simulation run. It provides:
//! 1. **Cycles:** Total cycles and host throughput.
//! 2. **Instruction mix:** Retired `noop` and `addx` counts.
//! 3. **Program:** Completed passes (wrap-arounds).
//! 4. **Outputs:** Checkpoints sampled and CRT rows emitted.

use std::time::Instant;

use serde::Serialize;

use crate::isa::instruction::Opcode;

/// Simulation statistics structure.
#[derive(Debug, Clone, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,
    /// Count of `noop` instructions retired.
    pub inst_noop: u64,
    /// Count of `addx` instructions retired.
    pub inst_addx: u64,
    /// Number of times the program wrapped back to its first instruction.
    pub program_passes: u64,
    /// Number of checksum checkpoints sampled.
    pub checkpoints_hit: u64,
    /// Number of CRT rows emitted.
    pub rows_emitted: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_noop: 0,
            inst_addx: 0,
            program_passes: 0,
            checkpoints_hit: 0,
            rows_emitted: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "output"];

impl SimStats {
    /// Records a retired instruction.
    pub const fn record_retired(&mut self, opcode: Opcode) {
        self.instructions_retired += 1;
        match opcode {
            Opcode::Noop => self.inst_noop += 1,
            Opcode::Addx => self.inst_addx += 1,
        }
    }

    /// Cycles per retired instruction (0 when nothing retired).
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;

        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.cycles as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("CRT CPU SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_freq                 {khz:.2} kHz");
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_cpi                  {:.4}", self.cpi());
            println!("sim_passes               {}", self.program_passes);
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            println!(
                "  op.noop                {} ({:.2}%)",
                self.inst_noop,
                (self.inst_noop as f64 / instr) * 100.0
            );
            println!(
                "  op.addx                {} ({:.2}%)",
                self.inst_addx,
                (self.inst_addx as f64 / instr) * 100.0
            );
            println!("----------------------------------------------------------");
        }
        if want("output") {
            println!("OUTPUT");
            println!("  checkpoints            {}", self.checkpoints_hit);
            println!("  crt.rows               {}", self.rows_emitted);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
