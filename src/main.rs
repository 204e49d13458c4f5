//! Binary entry point for Finance-Lens.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use finance_lens::cli::output::{OutputFormat, format_error};
use finance_lens::cli::{Cli, execute};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.format);

    match execute(&cli) {
        Ok(output) => emit(&output),
        Err(e) => {
            match format {
                // JSON errors go to stdout so callers can parse the envelope
                OutputFormat::Json => println!("{}", format_error(&e, format)),
                OutputFormat::Text => eprintln!("Error: {}", format_error(&e, format)),
            }
            ExitCode::FAILURE
        }
    }
}

/// Writes command output, tolerating a closed pipe (e.g. `| head`).
fn emit(output: &str) -> ExitCode {
    if output.is_empty() {
        return ExitCode::SUCCESS;
    }
    match write!(io::stdout(), "{output}") {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing to stdout: {e}");
            ExitCode::FAILURE
        }
    }
}
