//! `SQLite` storage implementation.
//!
//! [`ExpenseStore`] owns the on-disk database file. It holds only the
//! file path; every operation opens its own connection, executes, and
//! drops it. WAL journaling lets readers proceed while a writer holds
//! its transaction.

use crate::config::Config;
use crate::core::{CategorySummary, Expense, NewExpense};
use crate::error::{Result, StorageError};
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::storage::schema::{CHECK_SCHEMA_SQL, SCHEMA_SQL};

/// Lock-wait budget before a busy database surfaces as an error.
/// There is no application-level retry on top of this.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed expense store.
///
/// # Examples
///
/// ```no_run
/// use finance_lens::config::Config;
/// use finance_lens::storage::ExpenseStore;
///
/// let config = Config::new("/tmp/finance-lens");
/// let store = ExpenseStore::new(&config);
/// store.ensure_schema().unwrap();
/// ```
pub struct ExpenseStore {
    /// Path to the database file.
    path: PathBuf,
}

impl ExpenseStore {
    /// Creates a store for the database path in the given configuration.
    ///
    /// No I/O happens here; the file is touched by [`ensure_schema`]
    /// and by the individual operations.
    ///
    /// [`ensure_schema`]: ExpenseStore::ensure_schema
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.db_path().to_path_buf(),
        }
    }

    /// Returns the database file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a connection with WAL journaling and the busy timeout set.
    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path).map_err(StorageError::from)?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(StorageError::from)?;

        // The pragma returns the resulting mode as a row, so query_row
        let _: String = conn
            .query_row("PRAGMA journal_mode = WAL;", [], |row| row.get(0))
            .map_err(StorageError::from)?;

        Ok(conn)
    }

    /// Ensures the storage file and schema exist.
    ///
    /// Creates the parent directory if absent and creates the expenses
    /// table if it does not already exist. Idempotent: re-running
    /// against an initialized database is a no-op.
    ///
    /// Must run once per process before any operation below. A failure
    /// here is a startup failure; callers must not proceed to serve
    /// operations.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or database cannot be created.
    pub fn ensure_schema(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::Database(e.to_string()))?;
        }

        let conn = self.connect()?;
        conn.execute_batch(SCHEMA_SQL).map_err(StorageError::from)?;
        Ok(())
    }

    /// Checks whether the expenses table exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the check cannot be performed.
    pub fn is_initialized(&self) -> Result<bool> {
        let conn = self.connect()?;
        let count: i64 = conn
            .query_row(CHECK_SCHEMA_SQL, [], |row| row.get(0))
            .map_err(StorageError::from)?;
        Ok(count > 0)
    }

    /// Inserts an expense and returns the assigned ID.
    ///
    /// The ID is assigned by the database (monotonically increasing,
    /// never reused). Field values are stored as given; no date or
    /// amount validation is performed here.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, with
    /// [`StorageError::ReadOnly`] for permission failures.
    pub fn insert(&self, expense: &NewExpense) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            r"
            INSERT INTO expenses(date, amount, category, subcategory, note)
            VALUES (?, ?, ?, ?, ?)
        ",
            params![
                expense.date,
                expense.amount,
                expense.category,
                expense.subcategory,
                expense.note,
            ],
        )
        .map_err(StorageError::from)?;

        Ok(conn.last_insert_rowid())
    }

    /// Lists expenses within an inclusive date range.
    ///
    /// Bounds are compared lexically against stored `date` strings;
    /// rows come back ordered by date descending, ties broken by ID
    /// descending. An empty range is an empty vec, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self, start_date: &str, end_date: &str) -> Result<Vec<Expense>> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare(
                r"
            SELECT id, date, amount, category, subcategory, note
            FROM expenses
            WHERE date BETWEEN ? AND ?
            ORDER BY date DESC, id DESC
        ",
            )
            .map_err(StorageError::from)?;

        let expenses = stmt
            .query_map(params![start_date, end_date], |row| {
                Ok(Expense {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    amount: row.get(2)?,
                    category: row.get(3)?,
                    subcategory: row.get(4)?,
                    note: row.get(5)?,
                })
            })
            .map_err(StorageError::from)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StorageError::from)?;

        Ok(expenses)
    }

    /// Groups expenses by category within an inclusive date range.
    ///
    /// Sums amounts and counts rows per category, optionally filtered
    /// to one exact-match category, ordered by total amount descending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn summarize(
        &self,
        start_date: &str,
        end_date: &str,
        category: Option<&str>,
    ) -> Result<Vec<CategorySummary>> {
        let conn = self.connect()?;

        let mut sql = String::from(
            r"
            SELECT category, SUM(amount) AS total_amount, COUNT(*) AS count
            FROM expenses
            WHERE date BETWEEN ? AND ?
        ",
        );
        if category.is_some() {
            sql.push_str(" AND category = ?");
        }
        sql.push_str(" GROUP BY category ORDER BY total_amount DESC");

        let mut stmt = conn.prepare(&sql).map_err(StorageError::from)?;

        let map_row = |row: &rusqlite::Row<'_>| {
            Ok(CategorySummary {
                category: row.get(0)?,
                total_amount: row.get(1)?,
                count: row.get(2)?,
            })
        };

        let rows = match category {
            Some(cat) => stmt.query_map(params![start_date, end_date, cat], map_row),
            None => stmt.query_map(params![start_date, end_date], map_row),
        }
        .map_err(StorageError::from)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(StorageError::from)?;

        Ok(rows)
    }

    /// Deletes the expense with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ExpenseNotFound`] if no row matched;
    /// "not found" is an expected outcome, distinguished from storage
    /// faults so callers can react without parsing error text.
    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.connect()?;
        let affected = conn
            .execute("DELETE FROM expenses WHERE id = ?", params![id])
            .map_err(StorageError::from)?;

        if affected == 0 {
            return Err(StorageError::ExpenseNotFound { id }.into());
        }
        Ok(())
    }

    /// Returns the total number of stored expenses.
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails.
    #[allow(clippy::cast_sign_loss)]
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))
            .map_err(StorageError::from)?;
        Ok(count as usize)
    }
}
