//! Expense record model
//!
//! A record is created once from validated form input and never edited.

use chrono::{NaiveDateTime, Timelike};
use std::fmt;

use super::ids::RecordId;
use super::money::Money;

/// Default rendering of the capture timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    id: RecordId,
    name: String,
    amount: Money,
    category: String,
    timestamp: NaiveDateTime,
}

impl ExpenseRecord {
    /// Create a record captured at `timestamp`
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            amount,
            category: category.into(),
            // Sub-second precision is never shown, so drop it.
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Timestamp rendered with the default `YYYY-MM-DD HH:MM:SS` format
    pub fn formatted_timestamp(&self) -> String {
        self.format_timestamp(TIMESTAMP_FORMAT)
    }

    /// Timestamp rendered with a strftime format already checked by
    /// `Settings::load_or_default`
    pub fn format_timestamp(&self, format: &str) -> String {
        self.timestamp.format(format).to_string()
    }

    /// Case-insensitive substring match on name or category
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name,
            self.amount,
            self.category,
            self.formatted_timestamp()
        )
    }
}
