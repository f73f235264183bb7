use crtsim_core::common::Registers;
use crtsim_core::config::Config;
use crtsim_core::sim::{Program, RunLimit, RunMode, RunSummary, SimObserver, Simulator};

use super::fixtures::example_program;

pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    pub fn new(program: Program) -> Self {
        Self::with_config(program, &Config::default())
    }

    pub fn with_config(program: Program, config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();

        let sim = match Simulator::new(program, config) {
            Ok(sim) => sim,
            Err(e) => panic!("simulator construction failed: {e}"),
        };
        Self { sim }
    }

    /// A context loaded with the canonical example program.
    pub fn example() -> Self {
        Self::new(example_program())
    }

    pub fn regs(&self) -> Registers {
        self.sim.cpu.regs
    }

    pub fn x(&self) -> i64 {
        self.sim.cpu.regs.x
    }

    /// Run for a specific number of cycles in checksum mode, ignoring output.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            let _ = self.sim.step(RunMode::Checksum);
        }
    }

    /// Value of `x` during each of the next `cycles` cycles.
    pub fn x_timeline(&mut self, cycles: u64) -> Vec<i64> {
        (0..cycles)
            .map(|_| {
                let x = self.x();
                let _ = self.sim.step(RunMode::Checksum);
                x
            })
            .collect()
    }

    pub fn run_mode(
        &mut self,
        mode: RunMode,
        limit: RunLimit,
        observer: &mut dyn SimObserver,
    ) -> RunSummary {
        self.sim.run(mode, limit, observer)
    }
}
