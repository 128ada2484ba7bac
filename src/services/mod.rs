//! Service layer for Expense Ledger
//!
//! The controller applies user actions to the ledger; the notifier trait is
//! how it reports back to whoever is driving it.

pub mod expense;
pub mod notifier;

pub use expense::{recompute_total, validate_entry, EntryFields, ExpenseController};
pub use notifier::{Notice, NoticeLevel, Notifier, RecordingNotifier};
