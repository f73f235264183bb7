//! Simulator: owns the CPU and its peripherals side-by-side.
//!
//! All run state lives here (no globals), so tests can build as many simulators as they
//! like. A run samples exactly one peripheral, selected by [`RunMode`], and stops when
//! its [`RunLimit`] is reached.

use serde::Serialize;

use crate::common::error::SimError;
use crate::common::Registers;
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader::Program;
use crate::sim::observer::SimObserver;
use crate::soc::devices::{Checkpoint, Crt, SignalMonitor};
use crate::soc::traits::{Device, DeviceEvent};

/// Which peripheral a run samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Accumulate `x * cycle` at the configured checkpoints.
    Checksum,
    /// Render the display.
    Crt,
}

/// When a run stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLimit {
    /// After this many cycles.
    Cycles(u64),
    /// After the program has wrapped this many times. Ends immediately on an empty
    /// program, which never wraps.
    Passes(u64),
    /// Once the sampled device has nothing left to produce (checksum past its last
    /// checkpoint, CRT at the end of a frame). In continuous CRT mode this stops after the
    /// frame in progress; a run started on a frame boundary stops at once.
    UntilIdle,
    /// Never; the caller must interrupt the process.
    Unbounded,
}

impl RunLimit {
    /// Default limit for `mode`: the checksum runs to its last checkpoint, the CRT runs
    /// for one frame.
    pub const fn default_for(mode: RunMode, config: &Config) -> Self {
        match mode {
            RunMode::Checksum => Self::UntilIdle,
            RunMode::Crt => Self::Cycles(config.crt.frame_cycles()),
        }
    }
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Device that was sampled.
    pub mode: RunMode,
    /// Cycles executed by this run.
    pub cycles: u64,
    /// Cycles executed since power-on.
    pub total_cycles: u64,
    /// Program passes completed since power-on.
    pub passes: u64,
    /// Register state after the last cycle.
    pub registers: Registers,
    /// Running checksum (0 in CRT mode).
    pub checksum: i64,
    /// Checkpoints sampled by this run.
    pub checkpoints: Vec<Checkpoint>,
    /// Display contents after the run (empty in checksum mode).
    pub frame: Vec<String>,
}

/// Top-level simulator: CPU + peripherals.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// CPU architectural state and statistics.
    pub cpu: Cpu,
    /// Display.
    pub crt: Crt,
    /// Checksum accumulator.
    pub monitor: SignalMonitor,
    cycle: u64,
}

impl Simulator {
    /// Creates a simulator at power-on state.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if `config` fails validation.
    pub fn new(program: Program, config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            cpu: Cpu::new(program, config),
            crt: Crt::new(&config.crt),
            monitor: SignalMonitor::new(&config.checksum.checkpoints),
            cycle: 0,
        })
    }

    /// Number of cycles executed since power-on.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Returns the CPU and both peripherals to power-on state.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.crt.reset();
        self.monitor.reset();
        self.cycle = 0;
    }

    fn device(&self, mode: RunMode) -> &dyn Device {
        match mode {
            RunMode::Checksum => &self.monitor,
            RunMode::Crt => &self.crt,
        }
    }

    fn device_mut(&mut self, mode: RunMode) -> &mut dyn Device {
        match mode {
            RunMode::Checksum => &mut self.monitor,
            RunMode::Crt => &mut self.crt,
        }
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// The device samples the registers as they are during the cycle, then the CPU
    /// steps.
    pub fn step(&mut self, mode: RunMode) -> Option<DeviceEvent> {
        self.cycle += 1;
        let regs = self.cpu.regs;
        let cycle = self.cycle;
        let event = self.device_mut(mode).tick(cycle, &regs);
        match &event {
            Some(DeviceEvent::Checkpoint(_)) => self.cpu.stats.checkpoints_hit += 1,
            Some(DeviceEvent::Row { .. }) => self.cpu.stats.rows_emitted += 1,
            None => {}
        }
        let _ = self.cpu.tick();
        event
    }

    fn limit_reached(&self, mode: RunMode, limit: RunLimit, start: u64, start_passes: u64) -> bool {
        match limit {
            RunLimit::Cycles(n) => self.cycle - start >= n,
            RunLimit::Passes(n) => {
                self.cpu.program().is_empty() || self.cpu.passes() - start_passes >= n
            }
            RunLimit::UntilIdle => self.device(mode).is_idle(),
            RunLimit::Unbounded => false,
        }
    }

    /// Runs until `limit` is reached, forwarding output to `observer`.
    pub fn run(
        &mut self,
        mode: RunMode,
        limit: RunLimit,
        observer: &mut dyn SimObserver,
    ) -> RunSummary {
        let start = self.cycle;
        let start_passes = self.cpu.passes();
        tracing::info!(?mode, ?limit, device = self.device(mode).name(), "run started");

        let mut checkpoints = Vec::new();
        while !self.limit_reached(mode, limit, start, start_passes) {
            match self.step(mode) {
                Some(DeviceEvent::Checkpoint(checkpoint)) => {
                    observer.on_checkpoint(&checkpoint);
                    checkpoints.push(checkpoint);
                }
                Some(DeviceEvent::Row { index, pixels }) => observer.on_row(index, &pixels),
                None => {}
            }
        }

        let summary = RunSummary {
            mode,
            cycles: self.cycle - start,
            total_cycles: self.cycle,
            passes: self.cpu.passes(),
            registers: self.cpu.regs,
            checksum: match mode {
                RunMode::Checksum => self.monitor.sum(),
                RunMode::Crt => 0,
            },
            checkpoints,
            frame: match mode {
                RunMode::Checksum => Vec::new(),
                RunMode::Crt => self.crt.frame(),
            },
        };
        tracing::info!(
            cycles = summary.cycles,
            passes = summary.passes,
            checksum = summary.checksum,
            "run finished"
        );
        summary
    }

    /// Checksum entry point: samples the signal monitor until `limit`.
    pub fn run_checksum(&mut self, limit: RunLimit, observer: &mut dyn SimObserver) -> RunSummary {
        self.run(RunMode::Checksum, limit, observer)
    }

    /// CRT entry point: renders until `limit`.
    pub fn render(&mut self, limit: RunLimit, observer: &mut dyn SimObserver) -> RunSummary {
        self.run(RunMode::Crt, limit, observer)
    }
}
