//! Expense domain types.
//!
//! Expenses are the sole persisted entity: independent rows with no
//! cross-record relationships. Dates are opaque strings; the storage
//! layer compares them lexically, so chronological range and ordering
//! semantics require a sortable format such as ISO 8601 (`YYYY-MM-DD`).

use serde::{Deserialize, Serialize};

/// A persisted expense record.
///
/// # Examples
///
/// ```
/// use finance_lens::core::Expense;
///
/// let expense = Expense {
///     id: 1,
///     date: "2024-01-05".to_string(),
///     amount: 42.50,
///     category: "Food & Dining".to_string(),
///     subcategory: String::new(),
///     note: String::new(),
/// };
/// assert_eq!(expense.category, "Food & Dining");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier (assigned by the storage layer).
    pub id: i64,

    /// Date string as supplied by the caller. Not parsed or validated.
    pub date: String,

    /// Signed amount. No range or sign validation is performed.
    pub amount: f64,

    /// Category name.
    pub category: String,

    /// Subcategory name; empty string when not supplied.
    pub subcategory: String,

    /// Free-form note; empty string when not supplied.
    pub note: String,
}

/// A new expense awaiting insertion (no ID yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// Date string as supplied by the caller.
    pub date: String,

    /// Signed amount.
    pub amount: f64,

    /// Category name.
    pub category: String,

    /// Subcategory name; defaults to empty.
    #[serde(default)]
    pub subcategory: String,

    /// Free-form note; defaults to empty.
    #[serde(default)]
    pub note: String,
}

impl NewExpense {
    /// Creates a new expense with empty subcategory and note.
    ///
    /// # Examples
    ///
    /// ```
    /// use finance_lens::core::NewExpense;
    ///
    /// let expense = NewExpense::new("2024-01-05", 42.50, "Food & Dining");
    /// assert_eq!(expense.subcategory, "");
    /// assert_eq!(expense.note, "");
    /// ```
    #[must_use]
    pub fn new(date: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            amount,
            category: category.into(),
            subcategory: String::new(),
            note: String::new(),
        }
    }

    /// Sets the subcategory.
    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    /// Sets the note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// One row of a grouped category summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category name.
    pub category: String,

    /// Sum of amounts for the category within the queried range.
    pub total_amount: f64,

    /// Number of matching rows for the category.
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense_defaults() {
        let expense = NewExpense::new("2024-01-05", 42.50, "Food & Dining");
        assert_eq!(expense.date, "2024-01-05");
        assert!((expense.amount - 42.50).abs() < f64::EPSILON);
        assert_eq!(expense.category, "Food & Dining");
        assert!(expense.subcategory.is_empty());
        assert!(expense.note.is_empty());
    }

    #[test]
    fn test_new_expense_builder() {
        let expense = NewExpense::new("2024-01-05", 12.0, "Travel")
            .with_subcategory("Flights")
            .with_note("conference");
        assert_eq!(expense.subcategory, "Flights");
        assert_eq!(expense.note, "conference");
    }

    #[test]
    fn test_expense_serialization_shape() {
        let expense = Expense {
            id: 7,
            date: "2024-01-05".to_string(),
            amount: -3.25,
            category: "Other".to_string(),
            subcategory: String::new(),
            note: "refund".to_string(),
        };
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["date"], "2024-01-05");
        assert_eq!(value["amount"], -3.25);
        assert_eq!(value["subcategory"], "");
        assert_eq!(value["note"], "refund");
    }

    #[test]
    fn test_new_expense_deserialization_defaults() {
        let expense: NewExpense =
            serde_json::from_str(r#"{"date":"2024-02-01","amount":5.0,"category":"Shopping"}"#)
                .unwrap();
        assert!(expense.subcategory.is_empty());
        assert!(expense.note.is_empty());
    }

    #[test]
    fn test_category_summary_serialization_shape() {
        let summary = CategorySummary {
            category: "Food & Dining".to_string(),
            total_amount: 52.50,
            count: 2,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["category"], "Food & Dining");
        assert_eq!(value["total_amount"], 52.50);
        assert_eq!(value["count"], 2);
    }
}
