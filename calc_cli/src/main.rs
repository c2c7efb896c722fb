//! # Tally CLI Application
//!
//! Terminal front end for the calculator engine.
//!
//! - `calc_cli` - interactive Ratatui TUI
//! - `calc_cli --keys "7+3*2="` - feed keys to the engine, print the final display
//! - `calc_cli --keys "5/0=" --json` - same, as JSON (frame + full state)

mod batch;
mod tui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use calc_core::{load_config, CalcResult, EngineConfig};

/// Tally calculator
#[derive(Debug, Parser)]
#[command(name = "calc_cli", version, about)]
struct Args {
    /// Engine config file (JSON)
    #[arg(long, env = "CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Key sequence to run without the TUI, one key per character
    #[arg(long)]
    keys: Option<String>,

    /// Print batch output as JSON
    #[arg(long, requires = "keys")]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr, which would tear the TUI unless asked for
    if args.keys.is_some() || std::env::var_os("RUST_LOG").is_some() {
        let _ = calc_core::telemetry::init_default_tracing();
    }

    let config = engine_config(args.config.as_deref())?;

    match args.keys {
        Some(keys) => {
            let output = batch::run_keys(config, &keys);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", output.frame.display);
                println!("{}", output.frame.expression);
            }
        }
        None => tui::run(config)?,
    }

    Ok(())
}

fn engine_config(path: Option<&std::path::Path>) -> CalcResult<EngineConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(EngineConfig::default()),
    }
}
