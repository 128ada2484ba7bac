//! Custom error types for Expense Ledger
//!
//! User-facing errors (`ValidationError`, `SelectionError`) carry the exact
//! message shown in the warning dialog. `LedgerError` covers process-level
//! failures such as configuration and terminal I/O.

use thiserror::Error;

/// Rejected "Add Expense" input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name, amount or category was left empty
    #[error("All fields must be filled!")]
    MissingField,

    /// Amount text is not a finite decimal number, or the ledger total
    /// could no longer be represented
    #[error("Amount must be a number!")]
    InvalidAmount,
}

impl ValidationError {
    /// Title of the warning dialog for this error
    pub fn title(&self) -> &'static str {
        "Input Error"
    }
}

/// Rejected "Delete Expense" request
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Nothing is selected in the expense table
    #[error("Please select an expense to delete!")]
    NoSelection,
}

impl SelectionError {
    /// Title of the warning dialog for this error
    pub fn title(&self) -> &'static str {
        "Selection Error"
    }
}

/// The main error type for process-level failures
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Expense Ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
