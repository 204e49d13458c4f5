//! CLI command implementations.
//!
//! Contains the business logic for each CLI command. Startup order
//! follows the core contract: resolve configuration, ensure the schema
//! (failures here abort before any operation runs), then dispatch.
//!
//! In JSON mode every operation outcome - success or failure - is
//! shaped by the boundary adapter and returned as a value, so callers
//! check the `status` field instead of the exit code. Text mode lets
//! errors propagate for terminal reporting.

use crate::boundary;
use crate::categories;
use crate::cli::output::{OutputFormat, format_expense_list, format_summary};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::NewExpense;
use crate::error::{CommandError, Result};
use crate::storage::ExpenseStore;
use std::fmt::Write as FmtWrite;

/// Executes the CLI command.
///
/// # Errors
///
/// Returns an error if configuration or schema setup fails, or (in
/// text mode) if the command itself fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    let config = match &cli.data_dir {
        Some(dir) => Config::new(dir.clone()),
        None => Config::from_home()?,
    };

    // Schema setup failures are fatal: nothing below runs without it.
    let store = ExpenseStore::new(&config);
    store.ensure_schema()?;

    match &cli.command {
        Commands::Init => cmd_init(&config),
        Commands::Add {
            date,
            amount,
            category,
            subcategory,
            note,
        } => cmd_add(&store, date, *amount, category, subcategory, note, format),
        Commands::List {
            start_date,
            end_date,
        } => cmd_list(&store, start_date, end_date, format),
        Commands::Summarize {
            start_date,
            end_date,
            category,
        } => cmd_summarize(&store, start_date, end_date, category.as_deref(), format),
        Commands::Delete { expense_id } => cmd_delete(&store, *expense_id, format),
        Commands::Categories => cmd_categories(&config),
        Commands::Status => cmd_status(&store),
    }
}

fn cmd_init(config: &Config) -> Result<String> {
    // ensure_schema already ran; just confirm where the data lives
    Ok(format!(
        "Initialized expense database at: {}\n",
        config.db_path().display()
    ))
}

fn cmd_add(
    store: &ExpenseStore,
    date: &str,
    amount: f64,
    category: &str,
    subcategory: &str,
    note: &str,
    format: OutputFormat,
) -> Result<String> {
    let expense = NewExpense::new(date, amount, category)
        .with_subcategory(subcategory)
        .with_note(note);
    let result = store.insert(&expense);

    match format {
        OutputFormat::Json => to_pretty(&boundary::insert_response(result)),
        OutputFormat::Text => {
            let id = result?;
            Ok(format!("Expense added successfully (ID {id})\n"))
        }
    }
}

fn cmd_list(
    store: &ExpenseStore,
    start_date: &str,
    end_date: &str,
    format: OutputFormat,
) -> Result<String> {
    let result = store.list(start_date, end_date);

    match format {
        OutputFormat::Json => to_pretty(&boundary::list_response(result)),
        OutputFormat::Text => Ok(format_expense_list(&result?)),
    }
}

fn cmd_summarize(
    store: &ExpenseStore,
    start_date: &str,
    end_date: &str,
    category: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let result = store.summarize(start_date, end_date, category);

    match format {
        OutputFormat::Json => to_pretty(&boundary::summarize_response(result)),
        OutputFormat::Text => Ok(format_summary(&result?)),
    }
}

fn cmd_delete(store: &ExpenseStore, expense_id: i64, format: OutputFormat) -> Result<String> {
    let result = store.delete(expense_id);

    match format {
        OutputFormat::Json => to_pretty(&boundary::delete_response(expense_id, result)),
        OutputFormat::Text => {
            result?;
            Ok(format!("Expense {expense_id} deleted successfully\n"))
        }
    }
}

fn cmd_categories(config: &Config) -> Result<String> {
    // Served verbatim in both formats; this IS the resource content
    let mut content = boundary::categories_response(categories::load_or_create(config));
    if !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}

fn cmd_status(store: &ExpenseStore) -> Result<String> {
    let count = store.count()?;
    let db_size = std::fs::metadata(store.path()).ok().map(|m| m.len());

    let mut output = String::new();
    output.push_str("Finance-Lens Status\n");
    output.push_str("===================\n\n");
    let _ = writeln!(output, "  Expenses:  {count}");
    let _ = writeln!(output, "  Database:  {}", store.path().display());
    if let Some(size) = db_size {
        let _ = writeln!(output, "  DB size:   {size} bytes");
    }
    Ok(output)
}

fn to_pretty(value: &serde_json::Value) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CommandError::OutputFormat(e.to_string()).into())
}
