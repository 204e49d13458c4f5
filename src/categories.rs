//! Categories file resource.
//!
//! A static JSON document of category names kept next to the database.
//! If the file exists its content is served verbatim, with no further
//! validation; otherwise it is generated from the fixed default list
//! and persisted, so the second call returns the same content.

use crate::config::{Config, DEFAULT_CATEGORIES};
use crate::error::{ResourceError, Result};
use serde_json::json;

/// Returns the categories JSON, creating the file with defaults if absent.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or the default document
/// cannot be written.
pub fn load_or_create(config: &Config) -> Result<String> {
    let path = config.categories_path();

    if path.exists() {
        let content = std::fs::read_to_string(path).map_err(|e| ResourceError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        return Ok(content);
    }

    let document = json!({ "categories": DEFAULT_CATEGORIES });
    let content =
        serde_json::to_string_pretty(&document).map_err(ResourceError::from)?;

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| ResourceError::WriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    std::fs::write(path, &content).map_err(|e| ResourceError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_call_creates_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().join("lens"));

        let content = load_or_create(&config).unwrap();
        assert!(config.categories_path().exists());

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let categories = value["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 10);
        assert_eq!(categories[0], "Food & Dining");
        assert_eq!(categories[9], "Other");
    }

    #[test]
    fn test_second_call_returns_same_content() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().join("lens"));

        let first = load_or_create(&config).unwrap();
        let second = load_or_create(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_existing_file_served_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().to_path_buf());

        // Not even valid JSON; the resource does not validate
        std::fs::write(config.categories_path(), "custom content").unwrap();
        let content = load_or_create(&config).unwrap();
        assert_eq!(content, "custom content");
    }
}
