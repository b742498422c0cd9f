//! Model 3 batch file creator entry point.

mod app;
mod config;
mod console;
mod picker;
mod reporter;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Creates batch files to launch Sega Model 3 games with Supermodel.
#[derive(Debug, Parser)]
#[command(name = "model3batch", version)]
struct Cli {
    /// Path to the Supermodel emulator executable.
    #[arg(long, value_name = "FILE")]
    emulator: Option<PathBuf>,

    /// Folder containing the ROM zip files.
    #[arg(long, value_name = "DIR")]
    roms: Option<PathBuf>,

    /// Never open file dialogs for missing paths.
    #[arg(long)]
    no_dialogs: bool,
}

fn main() -> ExitCode {
    // User-facing progress goes through the console; tracing is for
    // diagnostics only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(app::run(cli)) {
        Ok(exit) => exit,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
