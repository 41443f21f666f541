//! enva - Python virtual environment health validator CLI tool
//!
//! Validates a virtual environment and prints a text or JSON report:
//! - Structure, Python and pip versions, activation
//! - Outdated and vulnerable packages
//! - Overall score and verdict

use clap::Parser;
use enva::cli::CliArgs;
use enva::domain::Status;
use enva::output::{create_formatter, OutputConfig};
use enva::pipeline::{Validator, ValidatorConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--verbose` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("enva=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("enva=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    tracing::debug!("enva starting with args: {:?}", args);

    if args.no_color {
        colored::control::set_override(false);
    }

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            println!("[❌ ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let validator = Validator::new(ValidatorConfig::from_cli(&args));

    let cwd = std::env::current_dir()?;
    let venv_path = validator.resolve_path(args.venv.as_deref(), &cwd);
    tracing::debug!("validating {}", venv_path.display());

    let result = validator.run(&venv_path).await?;

    // Create output formatter based on CLI options
    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.no_color));

    // Output results
    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    if result.overall_status == Status::Error {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
