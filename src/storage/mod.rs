//! Storage layer for Finance-Lens.
//!
//! Provides persistent expense storage using `SQLite` in WAL mode.
//! Each operation runs on its own short-lived connection: open, execute
//! one statement, commit, close. No connection state is shared between
//! calls, so operations may be dispatched concurrently; readers proceed
//! under WAL while a writer holds its transaction, and writers
//! serialize at the database layer.

pub mod schema;
pub mod sqlite;

pub use schema::SCHEMA_SQL;
pub use sqlite::ExpenseStore;
