//! Core domain models for Finance-Lens.
//!
//! This module contains the fundamental data structures used throughout
//! the system: expenses and per-category summaries. These are pure
//! domain models with no I/O dependencies.

pub mod expense;

pub use expense::{CategorySummary, Expense, NewExpense};
