//! Path management for Expense Ledger
//!
//! Only configuration lives on disk; recorded expenses never do.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_LEDGER_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/expense-ledger` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{LedgerError, LedgerResult};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "EXPENSE_LEDGER_CONFIG_DIR";

/// Manages the paths used by Expense Ledger
#[derive(Debug, Clone)]
pub struct ExpenseLedgerPaths {
    base_dir: PathBuf,
}

impl ExpenseLedgerPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> LedgerResult<Self> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "expense-ledger")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    LedgerError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> LedgerResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
