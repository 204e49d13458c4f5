//! # Finance-Lens
//!
//! Personal expense tracking over a single-file embedded database.
//!
//! Finance-Lens persists expense records in `SQLite` and exposes four
//! operations - insert, range list, grouped summarize, and delete -
//! behind a uniform result-or-error contract designed for a
//! tool-calling agent surface.
//!
//! ## Features
//!
//! - **`SQLite` Storage**: WAL mode, short-lived per-call connections
//! - **Boundary Contract**: status envelopes for mutations, bare row
//!   arrays for reads, structured errors for every failure
//! - **Categories Resource**: static JSON document created from a fixed
//!   default list on first use

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod boundary;
pub mod categories;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{CategorySummary, Expense, NewExpense};

// Re-export configuration
pub use config::{Config, DEFAULT_CATEGORIES, DEFAULT_DATA_DIR};

// Re-export storage types
pub use storage::ExpenseStore;

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
