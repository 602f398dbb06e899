//! E20 cache simulator CLI.
//!
//! This binary loads an E20 machine-code image and runs it to completion. It performs:
//! 1. **Configuration:** Parses the optional `--cache` geometry for one or two cache levels.
//! 2. **Simulation:** Executes the program, printing one line per cache access as it happens.
//! 3. **Reporting:** Prints the final machine state and, on request, execution statistics.
//!
//! Diagnostics go to stderr through `tracing` (filtered by `RUST_LOG`); stdout
//! carries only the simulator report.

use std::error::Error;
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use e20_core::Simulator;
use e20_core::config::{CacheHierarchyConfig, Config};
use e20_core::sim::RunOutcome;

#[derive(Parser, Debug)]
#[command(
    name = "e20sim",
    about = "Simulate E20 cache",
    long_about = "Simulate an E20 program, optionally classifying every lw/sw against one or two LRU caches.\n\nExamples:\n  e20sim program.bin\n  e20sim --cache 64,1,16 program.bin\n  e20sim --cache 16,2,2,64,4,4 --stats program.bin"
)]
struct Cli {
    /// The file containing machine code, typically with .bin suffix.
    filename: PathBuf,

    /// Cache configuration: size,associativity,blocksize (for one cache) or
    /// size,associativity,blocksize,size,associativity,blocksize (for two caches).
    #[arg(long, value_name = "CACHE")]
    cache: Option<CacheHierarchyConfig>,

    /// Stop after N instructions if the program has not halted.
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Print execution statistics after the final state.
    #[arg(long)]
    stats: bool,

    /// Print execution statistics as JSON after the final state.
    #[arg(long)]
    stats_json: bool,
}

/// Exit status for usage errors and failed runs.
const EXIT_FAILURE: i32 = 1;

fn main() {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => process::exit(code),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    process::exit(exit_code(&run(&cli)));
}

/// Parses the command line. Usage errors and `--help` print to stderr and
/// yield [`EXIT_FAILURE`].
fn parse_args<I, T>(args: I) -> Result<Cli, i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| {
        eprint!("{}", e.render());
        EXIT_FAILURE
    })
}

/// Reports a failed run on stderr and maps the result to an exit status.
fn exit_code(result: &Result<(), Box<dyn Error>>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            EXIT_FAILURE
        }
    }
}

/// Loads the image, runs it, and writes the report to stdout.
fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = Config {
        cache: cli.cache,
        max_steps: cli.max_steps,
        ..Config::default()
    };

    let mut sim = Simulator::from_image(&config, &cli.filename)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    write!(out, "{}", sim.cache_banner())?;

    let mut write_result = Ok(());
    let outcome = sim.run_with(|event| {
        if write_result.is_ok() {
            write_result = writeln!(out, "{event}");
        }
    });
    write_result?;

    if let RunOutcome::StepLimit { retired } = outcome {
        info!(retired, "simulation stopped at step limit");
    }

    write!(out, "{}", sim.final_state())?;

    let stats = &sim.cpu.stats;
    if cli.stats {
        writeln!(out, "{stats}")?;
    }
    if cli.stats_json {
        writeln!(out, "{}", stats.to_json()?)?;
    }

    out.flush()?;
    Ok(())
}
