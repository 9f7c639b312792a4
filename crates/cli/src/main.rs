//! X-ISA simulator CLI.
//!
//! This binary runs one program image to completion and writes the output
//! document. It performs:
//! 1. **Loading:** Program image, latency configuration, optional data image.
//! 2. **Execution:** Runs until `HALT` or a fatal fault, tracing each
//!    retired instruction to stderr.
//! 3. **Reporting:** Writes final registers and statistics as JSON, and
//!    optionally a data memory dump and a summary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use xsim_core::common::{ConfigError, LoadError, ReportError};
use xsim_core::config::LatencyConfig;
use xsim_core::sim::{Simulator, Termination};

#[derive(Parser, Debug)]
#[command(
    name = "xsim",
    author,
    version,
    about = "X-ISA functional simulator",
    long_about = "Run an X-ISA program image and write final registers and instruction statistics as JSON.\n\nExamples:\n  xsim prog.hex config.json out.json\n  xsim -q prog.hex config.json out.json --summary\n  xsim prog.hex config.json out.json --data data.hex --dump-data data_mem.txt"
)]
struct Cli {
    /// Program image: one hex word (or byte) per line, `#` starts a comment line.
    program: PathBuf,

    /// Latency configuration (JSON object with optional add/sub/and/nor/div/mul/mod/exp).
    config: PathBuf,

    /// Output file for final registers and statistics.
    output: PathBuf,

    /// Preload data memory from an image in the same format as the program.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Write data memory to this file after the run, one byte per line.
    #[arg(long, value_name = "PATH")]
    dump_data: Option<PathBuf>,

    /// Fail instead of using default latencies when the config file is missing.
    #[arg(long)]
    strict_config: bool,

    /// Print an instruction-mix summary to stdout after the run.
    #[arg(long)]
    summary: bool,

    /// Increase log detail (-v operand trace, -vv everything).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log warnings and errors (no per-instruction trace).
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(Termination::Halted) => ExitCode::SUCCESS,
        Ok(Termination::Aborted { .. }) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the flag-derived level.
fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

/// Loads inputs, runs the program, and writes the outputs.
///
/// Outputs are written for aborted runs too; only load and write failures
/// are errors.
fn run(cli: &Cli) -> Result<Termination, CliError> {
    let config = if cli.strict_config {
        LatencyConfig::load(&cli.config)?
    } else {
        LatencyConfig::load_or_default(&cli.config)?
    };

    let mut sim = Simulator::new(&config);
    sim.load_program_file(&cli.program)?;
    if let Some(path) = &cli.data {
        sim.load_data_file(path)?;
    }

    let termination = sim.run();
    match termination {
        Termination::Halted => info!("halted at pc {:#06x}", sim.cpu.pc),
        Termination::Aborted { pc, fault } => {
            error!("run aborted at pc {pc:#06x}: {fault}");
        }
    }

    sim.write_report(&cli.output)?;
    if let Some(path) = &cli.dump_data {
        sim.dump_data(path)?;
    }
    if cli.summary {
        sim.stats().print();
    }
    Ok(termination)
}
