//! Runtime configuration.
//!
//! A [`Config`] is built once at startup and passed to the components
//! that need it. It is immutable after construction: the data directory,
//! the derived file paths, and the default category list never change
//! for the lifetime of the process.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default data directory name under the user's home directory.
pub const DEFAULT_DATA_DIR: &str = ".finance_lens";

/// Database file name inside the data directory.
pub const DB_FILE_NAME: &str = "expenses.db";

/// Categories resource file name inside the data directory.
pub const CATEGORIES_FILE_NAME: &str = "categories.json";

/// The fixed default category list, in serving order.
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Travel",
    "Education",
    "Business",
    "Other",
];

/// Immutable runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    data_dir: PathBuf,
    db_path: PathBuf,
    categories_path: PathBuf,
}

impl Config {
    /// Creates a configuration rooted at the given data directory.
    ///
    /// File paths are derived from the directory; the directory itself
    /// is created lazily by the storage layer, not here.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        let data_dir = data_dir.into();
        let db_path = data_dir.join(DB_FILE_NAME);
        let categories_path = data_dir.join(CATEGORIES_FILE_NAME);
        Self {
            data_dir,
            db_path,
            categories_path,
        }
    }

    /// Creates a configuration rooted at `~/.finance_lens`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be resolved.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| Error::Config {
            message: "could not determine home directory".to_string(),
        })?;
        Ok(Self::new(home.join(DEFAULT_DATA_DIR)))
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the database file path.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Returns the categories file path.
    #[must_use]
    pub fn categories_path(&self) -> &Path {
        &self.categories_path
    }
}
