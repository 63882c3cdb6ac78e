//! Deployment process validator CLI.
//!
//! Reads a deployment process OCL file from the given directory, applies the
//! step rules, and exits 0 on pass / 1 on any failure (missing file, parse
//! failure, or rule failure).

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use stepcheck_validator::ValidationResult;

/// Default file name looked up inside the target directory
const DEFAULT_PROCESS_FILE: &str = "deployment_process.ocl";

#[derive(Parser, Debug)]
#[command(
    name = "stepcheck",
    version,
    about = "Validates the structure of a deployment process OCL file"
)]
struct Args {
    /// Directory holding the deployment process file
    directory: PathBuf,

    /// File name to validate inside the directory
    #[arg(long, default_value = DEFAULT_PROCESS_FILE)]
    file: String,

    /// Output format for the validation result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    env_logger::init();

    // Argument failures exit 1 like every other failure; help and version
    // output keep exiting 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&args) {
        Ok(result) if result.valid => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ValidationResult> {
    let path = args.directory.join(&args.file);
    log::debug!("validating {}", path.display());

    let source = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let result = stepcheck_validator::validate(&source);
    report(&result, args.format)?;
    Ok(result)
}

fn report(result: &ValidationResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for error in &result.errors {
                println!("{}", error.message);
            }
            if result.valid {
                println!("All checks passed");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
    }

    Ok(())
}
