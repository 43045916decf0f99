//! Attendance alert checker.
//!
//! Reads the roster and config, rotates the previous report log, and writes
//! a fresh report with one alert per student below threshold.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use attendance::exit_codes;
use attendance::io::archive::list_archives;
use attendance::io::clock::SystemClock;
use attendance::logging;
use attendance::report::{
    DEFAULT_CONFIG_PATH, DEFAULT_LOG_PATH, DEFAULT_ROSTER_PATH, RunPaths, run_check,
};

#[derive(Parser)]
#[command(
    name = "attendance",
    version,
    about = "Attendance threshold checker and alert logger"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Archive the previous report and write a new one from the roster.
    Check(CheckArgs),
    /// List archived reports, oldest first.
    Archives {
        /// Live report log whose archives to list.
        #[arg(long, default_value = DEFAULT_LOG_PATH)]
        log: PathBuf,
    },
}

#[derive(Args)]
struct CheckArgs {
    /// Settings document (JSON, or TOML when the extension is `.toml`).
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Roster CSV with `Names`, `Email`, `Attendance Count` columns.
    #[arg(long, default_value = DEFAULT_ROSTER_PATH)]
    roster: PathBuf,
    /// Report log; an existing one is archived first.
    #[arg(long, default_value = DEFAULT_LOG_PATH)]
    log: PathBuf,
}

impl From<CheckArgs> for RunPaths {
    fn from(args: CheckArgs) -> Self {
        Self {
            config: args.config,
            roster: args.roster,
            log: args.log,
        }
    }
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::for_error(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check(args) => cmd_check(args.into()),
        Command::Archives { log } => cmd_archives(log),
    }
}

fn cmd_check(paths: RunPaths) -> Result<()> {
    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    let outcome = run_check(&paths, &SystemClock, &mut console)?;
    writeln!(
        console,
        "report: rows={} urgent={} warning={}",
        outcome.summary.rows, outcome.summary.urgent, outcome.summary.warning
    )?;
    Ok(())
}

fn cmd_archives(log: PathBuf) -> Result<()> {
    for archive in list_archives(&log)? {
        println!("{}", archive.display());
    }
    Ok(())
}
