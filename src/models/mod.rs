//! Core data models for Expense Ledger
//!
//! Records, the money type, record handles and the ledger that holds them.

pub mod category;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod record;

pub use category::DEFAULT_CATEGORIES;
pub use ids::RecordId;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use record::{ExpenseRecord, TIMESTAMP_FORMAT};
