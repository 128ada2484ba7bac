//! Expense controller
//!
//! Owns the ledger, the current selection, the form field buffers and the
//! total label. Every user action maps to one method here; each runs to
//! completion and leaves the total label consistent with the ledger.

use chrono::{Local, NaiveDateTime};

use crate::error::{SelectionError, ValidationError};
use crate::models::{ExpenseRecord, Ledger, Money, RecordId};

use super::notifier::Notifier;

/// Title of the informational message shown when a search finds nothing
pub const SEARCH_RESULT_TITLE: &str = "Search Result";

/// Message shown when a search finds nothing
pub const NO_MATCH_MESSAGE: &str = "No matching expense found.";

/// Text buffers behind the Name, Amount and Category fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFields {
    pub name: String,
    pub amount: String,
    pub category: String,
}

impl EntryFields {
    pub fn clear(&mut self) {
        self.name.clear();
        self.amount.clear();
        self.category.clear();
    }
}

/// Check raw form input and parse the amount
///
/// Emptiness is checked on the text exactly as typed; the amount is trimmed
/// before parsing.
pub fn validate_entry(
    name: &str,
    amount_text: &str,
    category: &str,
) -> Result<Money, ValidationError> {
    if name.is_empty() || amount_text.is_empty() || category.is_empty() {
        return Err(ValidationError::MissingField);
    }

    Money::parse_decimal(amount_text).map_err(|_| ValidationError::InvalidAmount)
}

/// Render the total label for the current ledger contents
pub fn recompute_total(ledger: &Ledger, currency_symbol: &str) -> String {
    format!("Total: {}", ledger.total().format_with_symbol(currency_symbol))
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Application state for the expense form
pub struct ExpenseController<N: Notifier> {
    ledger: Ledger,
    selection: Vec<RecordId>,
    fields: EntryFields,
    search_query: String,
    total_label: String,
    currency_symbol: String,
    notifier: N,
    clock: fn() -> NaiveDateTime,
}

impl<N: Notifier> ExpenseController<N> {
    /// Create a controller with an empty ledger and a `$` currency prefix
    pub fn new(notifier: N) -> Self {
        let currency_symbol = "$".to_string();
        let ledger = Ledger::new();
        Self {
            total_label: recompute_total(&ledger, &currency_symbol),
            ledger,
            selection: Vec::new(),
            fields: EntryFields::default(),
            search_query: String::new(),
            currency_symbol,
            notifier,
            clock: local_now,
        }
    }

    /// Use a different currency prefix for amounts and the total
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self.refresh_total();
        self
    }

    /// Replace the wall clock used to stamp new records
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn total_label(&self) -> &str {
        &self.total_label
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn fields(&self) -> &EntryFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut EntryFields {
        &mut self.fields
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// "Add Expense" using the current field buffers
    pub fn submit(&mut self) -> Result<ExpenseRecord, ValidationError> {
        let EntryFields {
            name,
            amount,
            category,
        } = self.fields.clone();
        self.submit_entry(&name, &amount, &category)
    }

    /// Validate and append one expense
    ///
    /// On success the record is appended, the field buffers are cleared and
    /// the total is recomputed. On failure a warning is raised and nothing
    /// changes.
    pub fn submit_entry(
        &mut self,
        name: &str,
        amount_text: &str,
        category: &str,
    ) -> Result<ExpenseRecord, ValidationError> {
        let checked = validate_entry(name, amount_text, category).and_then(|amount| {
            if self.ledger.can_append(amount) {
                Ok(amount)
            } else {
                Err(ValidationError::InvalidAmount)
            }
        });
        let amount = match checked {
            Ok(amount) => amount,
            Err(err) => {
                tracing::warn!(error = %err, "rejected expense input");
                self.notifier.warn(err.title(), &err.to_string());
                return Err(err);
            }
        };

        let record = ExpenseRecord::new(name, amount, category, (self.clock)());
        tracing::info!(
            record = %record.id(),
            amount = %record.amount(),
            category = record.category(),
            "expense added"
        );

        self.ledger.push(record.clone());
        self.fields.clear();
        self.refresh_total();

        Ok(record)
    }

    /// "Delete Expense": remove every selected record
    pub fn delete_selected(&mut self) -> Result<(), SelectionError> {
        if self.selection.is_empty() {
            let err = SelectionError::NoSelection;
            tracing::warn!(error = %err, "delete requested without a selection");
            self.notifier.warn(err.title(), &err.to_string());
            return Err(err);
        }

        let removed = self.ledger.remove_many(&self.selection);
        self.selection.clear();
        self.refresh_total();
        tracing::info!(removed, remaining = self.ledger.len(), "expenses deleted");

        Ok(())
    }

    /// "Clear All": empty the ledger unconditionally
    pub fn clear_all(&mut self) {
        let removed = self.ledger.len();
        self.ledger.clear();
        self.selection.clear();
        self.refresh_total();
        tracing::info!(removed, "ledger cleared");
    }

    /// "Search" using the current search buffer
    pub fn search(&mut self) -> Option<RecordId> {
        let query = self.search_query.clone();
        self.search_for(&query)
    }

    /// Select the first record whose name or category contains `query`
    ///
    /// Leaves the selection untouched and informs the user when nothing
    /// matches.
    pub fn search_for(&mut self, query: &str) -> Option<RecordId> {
        match self.ledger.find_first(query).map(ExpenseRecord::id) {
            Some(id) => {
                tracing::debug!(query, record = %id, "search matched");
                self.selection = vec![id];
                Some(id)
            }
            None => {
                tracing::debug!(query, "search found no match");
                self.notifier.inform(SEARCH_RESULT_TITLE, NO_MATCH_MESSAGE);
                None
            }
        }
    }

    /// Currently selected records, in the order they were selected
    pub fn selection(&self) -> &[RecordId] {
        &self.selection
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selection.contains(&id)
    }

    /// Make `id` the only selected record
    pub fn select_only(&mut self, id: RecordId) {
        if self.ledger.get(id).is_some() {
            self.selection = vec![id];
        }
    }

    /// Add `id` to the selection, or remove it if already selected
    pub fn toggle_selected(&mut self, id: RecordId) {
        if self.is_selected(id) {
            self.selection.retain(|s| *s != id);
        } else if self.ledger.get(id).is_some() {
            self.selection.push(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn refresh_total(&mut self) {
        self.total_label = recompute_total(&self.ledger, &self.currency_symbol);
    }
}
