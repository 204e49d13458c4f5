//! CLI layer for Finance-Lens.
//!
//! Provides the command-line interface using clap, with one command
//! per expense operation plus the categories resource and status.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
