//! Output formatting for CLI commands.
//!
//! Text output is a human rendering; JSON output passes through the
//! boundary adapter, so `--format json` emits exactly the contract the
//! tool-calling layer consumes.

use crate::core::{CategorySummary, Expense};
use crate::error::Error;
use serde_json::json;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output (boundary contract).
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats an expense list as a text table.
#[must_use]
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<6} {:<12} {:>10}  {:<20} {:<15} Note",
        "ID", "Date", "Amount", "Category", "Subcategory"
    );
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for expense in expenses {
        let _ = writeln!(
            output,
            "{:<6} {:<12} {:>10.2}  {:<20} {:<15} {}",
            expense.id,
            expense.date,
            expense.amount,
            truncate(&expense.category, 20),
            truncate(&expense.subcategory, 15),
            truncate(&expense.note, 30),
        );
    }

    output
}

/// Formats a category summary as a text table.
#[must_use]
pub fn format_summary(summaries: &[CategorySummary]) -> String {
    if summaries.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "{:<20} {:>12} {:>8}", "Category", "Total", "Count");
    output.push_str(&"-".repeat(42));
    output.push('\n');

    for summary in summaries {
        let _ = writeln!(
            output,
            "{:<20} {:>12.2} {:>8}",
            truncate(&summary.category, 20),
            summary.total_amount,
            summary.count,
        );
    }

    output
}

/// Formats an error for terminal or JSON consumption.
///
/// JSON form matches the boundary error envelope.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            json!({ "status": "error", "message": err.to_string() }).to_string()
        }
    }
}

/// Truncates a string to max length (in chars) with ellipsis.
///
/// Cuts on char boundaries; stored notes and categories are arbitrary
/// strings, so byte indexing could land inside a multibyte sequence.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    fn sample_expense() -> Expense {
        Expense {
            id: 1,
            date: "2024-01-05".to_string(),
            amount: 42.50,
            category: "Food & Dining".to_string(),
            subcategory: String::new(),
            note: "lunch".to_string(),
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_expense_list_empty() {
        assert_eq!(format_expense_list(&[]), "No expenses found.\n");
    }

    #[test]
    fn test_format_expense_list_contains_fields() {
        let output = format_expense_list(&[sample_expense()]);
        assert!(output.contains("2024-01-05"));
        assert!(output.contains("42.50"));
        assert!(output.contains("Food & Dining"));
        assert!(output.contains("lunch"));
    }

    #[test]
    fn test_format_summary_contains_totals() {
        let output = format_summary(&[CategorySummary {
            category: "Food & Dining".to_string(),
            total_amount: 52.50,
            count: 2,
        }]);
        assert!(output.contains("Food & Dining"));
        assert!(output.contains("52.50"));
        assert!(output.contains('2'));
    }

    #[test]
    fn test_format_error_json_envelope() {
        let err: Error = StorageError::ExpenseNotFound { id: 3 }.into();
        let output = format_error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "error");
        assert!(value["message"].as_str().unwrap().contains('3'));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string", 10), "a longe...");
        assert_eq!(truncate("abc", 2), "ab");
    }

    #[test]
    fn test_truncate_cuts_on_char_boundaries() {
        // 32 chars, 33 bytes: the é spans the byte at the old cut point
        let s = "abcdefghijklmnopqrstuvwxyzéeeeee";
        assert_eq!(truncate(s, 30), "abcdefghijklmnopqrstuvwxyzé...");
        assert_eq!(truncate("ééééé", 4), "é...");
        assert_eq!(truncate("éé", 1), "é");
    }

    #[test]
    fn test_format_expense_list_multibyte_note() {
        let mut expense = sample_expense();
        expense.note = "abcdefghijklmnopqrstuvwxyzéeeeee".to_string();
        expense.category = "Café & Pâtisserie visits galore!!".to_string();
        let output = format_expense_list(&[expense]);
        assert!(output.contains("..."));
    }
}
