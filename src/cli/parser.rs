//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. One subcommand
//! per storage operation, plus the categories resource and status.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Finance-Lens: personal expense tracking over a single-file database.
///
/// Records expenses in `SQLite` and exposes create, list, summarize,
/// and delete operations with a stable JSON result contract.
#[derive(Parser, Debug)]
#[command(name = "finance-lens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory holding the database and categories file.
    ///
    /// Defaults to `~/.finance_lens`.
    #[arg(short, long, env = "FINANCE_LENS_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the expense database.
    ///
    /// Creates the data directory and schema if they don't exist.
    /// Safe to re-run.
    Init,

    /// Add a new expense.
    Add {
        /// Expense date. Use a lexically sortable format (YYYY-MM-DD)
        /// for range queries to carry chronological meaning.
        date: String,

        /// Amount (signed).
        amount: f64,

        /// Category name.
        category: String,

        /// Optional subcategory.
        #[arg(short, long, default_value = "")]
        subcategory: String,

        /// Optional note.
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// List expenses within an inclusive date range.
    #[command(alias = "ls")]
    List {
        /// Range start date (inclusive).
        start_date: String,

        /// Range end date (inclusive).
        end_date: String,
    },

    /// Summarize expenses by category within an inclusive date range.
    Summarize {
        /// Range start date (inclusive).
        start_date: String,

        /// Range end date (inclusive).
        end_date: String,

        /// Restrict the summary to one category (exact match).
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete an expense by ID.
    #[command(alias = "rm")]
    Delete {
        /// Expense ID.
        expense_id: i64,
    },

    /// Print the categories resource (created with defaults if absent).
    Categories,

    /// Show database status.
    Status,
}
