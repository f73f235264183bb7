//! CRT CPU simulator CLI.
//!
//! This binary provides a single entry point for both run modes. It performs:
//! 1. **Checksum run:** Sum `x * cycle` over the configured checkpoint cycles, printing the
//!    register snapshot and running sum at each checkpoint.
//! 2. **CRT run:** Render the 40x6 display, printing each row as the beam finishes it.
//!
//! The program file is parsed in full before the first cycle; a bad line exits with code 1.

use std::path::PathBuf;
use std::process;

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crtsim_core::common::SimError;
use crtsim_core::config::Config;
use crtsim_core::sim::{Program, RunLimit, RunMode, RunSummary, SimObserver, Simulator};
use crtsim_core::soc::Checkpoint;
use crtsim_core::stats::STATS_SECTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "crtsim",
    author,
    version,
    about = "Single-register CPU and CRT simulator",
    long_about = "Run a noop/addx program and either compute its signal-strength checksum or render the CRT it drives.\n\nExamples:\n  crtsim checksum -f input.txt\n  crtsim crt -f input.txt\n  crtsim crt -f input.txt --passes 2 --config wide.json\n  crtsim checksum -f input.txt --stats --stats-sections summary,output\n\nSet RUST_LOG=debug for wrap-around and checkpoint events, RUST_LOG=trace with --trace for every retired instruction."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Accumulate `x * cycle` at the checkpoint cycles (20, 60, ..., 220 by default).
    Checksum(RunArgs),

    /// Render the CRT, one row per line.
    Crt(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Program to execute (one `noop` or `addx N` per line).
    #[arg(short, long)]
    file: PathBuf,

    /// JSON configuration file; omitted fields keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many cycles.
    #[arg(long, conflicts_with_all = ["passes", "forever"])]
    max_cycles: Option<u64>,

    /// Stop after the program has wrapped this many times.
    #[arg(long, conflicts_with = "forever")]
    passes: Option<u64>,

    /// Never stop on its own (interrupt to exit).
    #[arg(long)]
    forever: bool,

    /// Print a JSON summary instead of the live output.
    #[arg(long)]
    json: bool,

    /// Print the final CPU state and simulation statistics after the run.
    #[arg(long)]
    stats: bool,

    /// Restrict `--stats` to these sections (comma-separated; all when omitted).
    #[arg(
        long,
        value_delimiter = ',',
        requires = "stats",
        value_parser = PossibleValuesParser::new(STATS_SECTIONS.iter().copied())
    )]
    stats_sections: Vec<String>,

    /// Emit a trace event for every retired instruction.
    #[arg(long)]
    trace: bool,
}

impl RunArgs {
    fn limit(&self, mode: RunMode, config: &Config) -> RunLimit {
        if self.forever {
            RunLimit::Unbounded
        } else if let Some(n) = self.max_cycles {
            RunLimit::Cycles(n)
        } else if let Some(n) = self.passes {
            RunLimit::Passes(n)
        } else {
            RunLimit::default_for(mode, config)
        }
    }
}

/// Prints run output as it is produced.
struct ConsoleObserver {
    quiet: bool,
}

impl SimObserver for ConsoleObserver {
    fn on_checkpoint(&mut self, checkpoint: &Checkpoint) {
        if !self.quiet {
            println!("{}", checkpoint.registers);
            println!("{}", checkpoint.running_sum);
        }
    }

    fn on_row(&mut self, _index: usize, row: &str) {
        if !self.quiet {
            println!("{row}");
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Checksum(args) => cmd_run(RunMode::Checksum, &args),
        Commands::Crt(args) => cmd_run(RunMode::Crt, &args),
    };

    if let Err(e) = result {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the config and program, runs one mode to its limit and reports the result.
fn cmd_run(mode: RunMode, args: &RunArgs) -> Result<(), SimError> {
    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= args.trace;

    let program = Program::from_file(&args.file)?;
    let limit = args.limit(mode, &config);
    tracing::debug!(file = %args.file.display(), ?mode, ?limit, "limit selected");
    let mut sim = Simulator::new(program, &config)?;
    let mut observer = ConsoleObserver { quiet: args.json };

    let summary = sim.run(mode, limit, &mut observer);
    report(mode, &summary, args.json);

    if args.stats {
        sim.cpu.dump_state();
        sim.cpu.stats.print_sections(&args.stats_sections);
    }
    Ok(())
}

fn report(mode: RunMode, summary: &RunSummary, json: bool) {
    if json {
        match serde_json::to_string_pretty(summary) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("[!] could not serialize summary: {e}"),
        }
        return;
    }
    if mode == RunMode::Checksum {
        println!("checksum: {}", summary.checksum);
    }
}
