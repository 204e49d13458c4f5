//! Result-or-error envelope contract for the tool-calling layer.
//!
//! Every operation outcome is shaped into a JSON value here; nothing
//! escapes as a fault. The contract is deliberately asymmetric and must
//! stay that way for compatibility with existing callers:
//!
//! - mutations (`insert`, `delete`) return a `{status, ...}` envelope;
//! - reads (`list`, `summarize`) return a bare array of row mappings;
//! - every failure, from any operation, returns
//!   `{"status": "error", "message": <string>}`.

use crate::core::{CategorySummary, Expense};
use crate::error::{Error, Result, StorageError};
use serde_json::{Value, json};

/// Fixed message for the read-only / permission-denied failure mode,
/// kept distinguishable so callers can prompt to fix permissions.
pub const READ_ONLY_MESSAGE: &str = "Database is read-only. Check file permissions.";

/// Builds the error envelope for a failed operation.
///
/// [`StorageError::ReadOnly`] gets its fixed message; everything else
/// is prefixed with the operation's context string.
fn error_envelope(context: &str, err: &Error) -> Value {
    let message = match err {
        Error::Storage(StorageError::ReadOnly) => READ_ONLY_MESSAGE.to_string(),
        Error::Storage(StorageError::ExpenseNotFound { id }) => {
            format!("No expense found with ID {id}")
        }
        // Inner detail only; the wrapper Display prefixes would stack up
        Error::Storage(StorageError::Database(detail)) => format!("{context}: {detail}"),
        other => format!("{context}: {other}"),
    };
    json!({ "status": "error", "message": message })
}

/// Shapes an insert outcome.
///
/// Success: `{"status": "success", "id": N, "message": ...}`.
#[must_use]
pub fn insert_response(result: Result<i64>) -> Value {
    match result {
        Ok(id) => json!({
            "status": "success",
            "id": id,
            "message": format!("Expense added successfully (ID {id})"),
        }),
        Err(err) => error_envelope("Database error", &err),
    }
}

/// Shapes a list outcome.
///
/// Success: a bare array of full expense records, no wrapper.
#[must_use]
pub fn list_response(result: Result<Vec<Expense>>) -> Value {
    match result {
        Ok(expenses) => json!(expenses),
        Err(err) => error_envelope("Error listing expenses", &err),
    }
}

/// Shapes a summarize outcome.
///
/// Success: a bare array of `{category, total_amount, count}` rows.
#[must_use]
pub fn summarize_response(result: Result<Vec<CategorySummary>>) -> Value {
    match result {
        Ok(summaries) => json!(summaries),
        Err(err) => error_envelope("Error summarizing expenses", &err),
    }
}

/// Shapes a delete outcome.
///
/// Success: `{"status": "success", "message": ...}`. A missing ID is an
/// expected outcome and maps to the error envelope, not a fault.
#[must_use]
pub fn delete_response(id: i64, result: Result<()>) -> Value {
    match result {
        Ok(()) => json!({
            "status": "success",
            "message": format!("Expense {id} deleted successfully"),
        }),
        Err(err) => error_envelope("Error deleting expense", &err),
    }
}

/// Shapes a categories resource outcome.
///
/// Success: the file content served verbatim. Failure: a JSON object
/// with an `error` key, mirroring how the resource reports problems.
#[must_use]
pub fn categories_response(result: Result<String>) -> String {
    match result {
        Ok(content) => content,
        Err(err) => json!({ "error": format!("Could not load categories: {err}") }).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_success_envelope() {
        let value = insert_response(Ok(1));
        assert_eq!(value["status"], "success");
        assert_eq!(value["id"], 1);
        assert_eq!(value["message"], "Expense added successfully (ID 1)");
    }

    #[test]
    fn test_insert_readonly_has_fixed_message() {
        let value = insert_response(Err(StorageError::ReadOnly.into()));
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], READ_ONLY_MESSAGE);
    }

    #[test]
    fn test_insert_storage_fault_is_reported() {
        let value = insert_response(Err(StorageError::Database("disk full".to_string()).into()));
        assert_eq!(value["status"], "error");
        // The context string plus the bare detail, no wrapper prefixes
        assert_eq!(value["message"], "Database error: disk full");
    }

    #[test]
    fn test_list_success_is_bare_array() {
        let expenses = vec![Expense {
            id: 2,
            date: "2024-01-10".to_string(),
            amount: 10.0,
            category: "Food & Dining".to_string(),
            subcategory: String::new(),
            note: String::new(),
        }];
        let value = list_response(Ok(expenses));
        assert!(value.is_array());
        assert_eq!(value[0]["id"], 2);
        assert_eq!(value[0]["category"], "Food & Dining");
    }

    #[test]
    fn test_list_empty_is_empty_array() {
        let value = list_response(Ok(vec![]));
        assert_eq!(value, json!([]));
    }

    #[test]
    fn test_list_error_envelope() {
        let value = list_response(Err(StorageError::Database("locked".to_string()).into()));
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "Error listing expenses: locked");
    }

    #[test]
    fn test_summarize_error_envelope() {
        let value =
            summarize_response(Err(StorageError::Database("disk I/O error".to_string()).into()));
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "Error summarizing expenses: disk I/O error");
    }

    #[test]
    fn test_summarize_success_is_bare_array() {
        let summaries = vec![CategorySummary {
            category: "Food & Dining".to_string(),
            total_amount: 52.50,
            count: 2,
        }];
        let value = summarize_response(Ok(summaries));
        assert!(value.is_array());
        assert_eq!(value[0]["total_amount"], 52.50);
        assert_eq!(value[0]["count"], 2);
    }

    #[test]
    fn test_delete_success_envelope() {
        let value = delete_response(1, Ok(()));
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "Expense 1 deleted successfully");
    }

    #[test]
    fn test_delete_not_found_envelope() {
        let value = delete_response(7, Err(StorageError::ExpenseNotFound { id: 7 }.into()));
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "No expense found with ID 7");
    }

    #[test]
    fn test_categories_success_passes_content_through() {
        let content = "{\n  \"categories\": []\n}".to_string();
        assert_eq!(categories_response(Ok(content.clone())), content);
    }

    #[test]
    fn test_categories_error_is_json_object() {
        let response = categories_response(Err(Error::Config {
            message: "no home directory".to_string(),
        }));
        let value: Value = serde_json::from_str(&response).unwrap();
        assert!(
            value["error"]
                .as_str()
                .unwrap()
                .starts_with("Could not load categories")
        );
    }
}
