//! Configuration module for Expense Ledger
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings loading and saving

pub mod paths;
pub mod settings;

pub use paths::ExpenseLedgerPaths;
pub use settings::Settings;
