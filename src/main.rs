//! har2xlsx CLI
//!
//! Converts an HTTP Archive (.har) capture into an xlsx spreadsheet.

use clap::Parser;
use env_logger::Env;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

use har2xlsx::commands::{execute_convert, validate_args, ConvertArgs};

/// Convert HTTP Archive (.har) recordings into Excel (.xlsx) files
#[derive(Parser, Debug)]
#[command(name = "har2xlsx")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input HAR file
    #[arg(short, long)]
    input: PathBuf,

    /// Output xlsx file
    #[arg(short, long)]
    output: PathBuf,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ConvertArgs {
        input: cli.input,
        output: cli.output,
        print_summary: cli.summary,
    };

    match validate_args(&args).and_then(|()| execute_convert(&args)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
