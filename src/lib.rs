//! Expense Ledger - a small terminal expense tracker
//!
//! Enter expenses with a name, amount and category; the ledger keeps them in
//! insertion order and shows a running total. Records live in memory for the
//! lifetime of the session; only user settings are read from disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Config directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Records, money and the ledger
//! - `services`: The controller that applies user actions, and the notifier trait
//! - `tui`: The ratatui front end
//!
//! # Example
//!
//! ```rust
//! use expense_ledger::services::{ExpenseController, RecordingNotifier};
//!
//! let mut controller = ExpenseController::new(RecordingNotifier::default());
//! controller.submit_entry("Lunch", "12.5", "Food").unwrap();
//! controller.submit_entry("Taxi", "7", "Transport").unwrap();
//! assert_eq!(controller.total_label(), "Total: $19.50");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{LedgerError, LedgerResult, SelectionError, ValidationError};
