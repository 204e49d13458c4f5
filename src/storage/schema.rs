//! Database schema definitions.
//!
//! Contains the SQL schema for the expenses `SQLite` database. The
//! schema is fixed: a single `expenses` table, created once and assumed
//! stable. There is no migration framework.

/// SQL schema for database setup. Idempotent.
pub const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS expenses(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    amount REAL NOT NULL,
    category TEXT NOT NULL,
    subcategory TEXT DEFAULT '',
    note TEXT DEFAULT ''
);
";

/// SQL to check whether the expenses table exists.
pub const CHECK_SCHEMA_SQL: &str = r"
SELECT COUNT(*) FROM sqlite_master
WHERE type='table' AND name='expenses';
";
