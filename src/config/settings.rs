//! User settings for Expense Ledger
//!
//! Display and behaviour preferences: currency prefix, timestamp format,
//! category suggestions, UI timings and the log level.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ExpenseLedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::category::DEFAULT_CATEGORIES;

/// User settings for Expense Ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to amounts and the total
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp format for the Date column (strftime format)
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Suggestions offered by the Category field
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Event loop tick in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// How long informational toasts stay on screen
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// Log level used when `--log-file` is given and `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notification_secs() -> u64 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            timestamp_format: default_timestamp_format(),
            categories: default_categories(),
            tick_rate_ms: default_tick_rate_ms(),
            notification_secs: default_notification_secs(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ExpenseLedgerPaths) -> LedgerResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the UI cannot work with
    pub fn validate(&self) -> LedgerResult<()> {
        if self.tick_rate_ms == 0 {
            return Err(LedgerError::Config(
                "tick_rate_ms must be greater than zero".into(),
            ));
        }

        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(LedgerError::Config(format!(
                "Invalid timestamp_format: {}",
                self.timestamp_format
            )));
        }

        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpenseLedgerPaths) -> LedgerResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
