//! Food Finder command-line entry point.
//!
//! # Responsibility
//! - Parse startup arguments and initialize file logging.
//! - Open the backing file and hand stdin/stdout to the guide loop.
//! - Own process termination for fatal startup failures.

use clap::Parser;
use foodfinder_core::{
    core_version, default_log_dir, default_log_level, init_logging, open_store, startup_notice,
    GuideConfig, Guide, GuideService, Startup, DEFAULT_DATA_FILE,
};
use log::{error, info};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Interactive guide for browsing, searching and adding restaurants.
#[derive(Debug, Parser)]
#[command(name = "foodfinder", version)]
struct Cli {
    /// Restaurant data file; created when missing.
    #[arg(default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);
    if let Err(err) = init_logging(level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok core_version={} data_file={}",
        core_version(),
        cli.data_file.display()
    );

    let config = match GuideConfig::new(cli.data_file) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let store = match open_store(&config) {
        Startup::Ready { store, origin } => {
            print!("{}", startup_notice(origin));
            store
        }
        Startup::Fatal(err) => {
            error!("event=startup module=cli status=fatal error={err}");
            println!("Exiting.\n");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut guide = Guide::new(GuideService::new(store), stdin.lock(), stdout.lock());
    if let Err(err) = guide.launch() {
        error!("event=guide_launch module=cli status=error error={err}");
        let _ = writeln!(io::stderr(), "terminal error: {err}");
        return ExitCode::FAILURE;
    }

    info!("event=app_exit module=cli status=ok");
    ExitCode::SUCCESS
}
