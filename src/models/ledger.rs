//! The ledger: insertion-ordered expense records
//!
//! Supports append, removal of a subset and full clear. Totals are always a
//! full rescan of what is currently held.

use super::ids::RecordId;
use super::money::Money;
use super::record::ExpenseRecord;

/// Ordered collection of the expenses currently displayed
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end
    pub fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    /// Remove every record whose id is in `ids`, keeping the others in order
    ///
    /// Returns the number of records removed.
    pub fn remove_many(&mut self, ids: &[RecordId]) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !ids.contains(&r.id()));
        before - self.records.len()
    }

    /// Remove all records
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in display order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Display row of a record
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Whether `amount` can be appended while every total reachable by
    /// deleting records still fits in an `i64` of cents
    ///
    /// Any subset total lies between the sum of the negative amounts and the
    /// sum of the others, so only those two sums need checking.
    pub fn can_append(&self, amount: Money) -> bool {
        self.records
            .iter()
            .map(ExpenseRecord::amount)
            .filter(|m| m.is_negative() == amount.is_negative())
            .try_fold(amount, Money::checked_add)
            .is_some()
    }

    /// Sum of every record's amount
    pub fn total(&self) -> Money {
        self.records.iter().map(ExpenseRecord::amount).sum()
    }

    /// First record, in display order, whose name or category contains
    /// `query` ignoring case
    pub fn find_first(&self, query: &str) -> Option<&ExpenseRecord> {
        let needle = query.to_lowercase();
        self.records.iter().find(|r| r.matches(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn record(name: &str, cents: i64, category: &str) -> ExpenseRecord {
        ExpenseRecord::new(name, Money::from_cents(cents), category, ts())
    }

    #[test]
    fn test_push_preserves_order() {
        let mut ledger = Ledger::new();
        ledger.push(record("A", 100, "Food"));
        ledger.push(record("B", 200, "Food"));
        ledger.push(record("C", 300, "Food"));

        let names: Vec<_> = ledger.records().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_total_is_full_sum() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.total(), Money::zero());

        ledger.push(record("Lunch", 1250, "Food"));
        ledger.push(record("Taxi", 700, "Transport"));
        assert_eq!(ledger.total().cents(), 1950);
    }

    #[test]
    fn test_remove_many_keeps_others_in_order() {
        let mut ledger = Ledger::new();
        let a = record("A", 100, "x");
        let b = record("B", 200, "x");
        let c = record("C", 300, "x");
        let (a_id, c_id) = (a.id(), c.id());
        ledger.push(a);
        ledger.push(b);
        ledger.push(c);

        assert_eq!(ledger.remove_many(&[a_id, c_id]), 2);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.records()[0].name(), "B");
        assert_eq!(ledger.total().cents(), 200);
    }

    #[test]
    fn test_remove_only_the_selected_duplicate() {
        let mut ledger = Ledger::new();
        let first = record("Tea", 100, "Food");
        let second = record("Tea", 100, "Food");
        let second_id = second.id();
        let first_id = first.id();
        ledger.push(first);
        ledger.push(second);

        assert_eq!(ledger.remove_many(&[second_id]), 1);
        assert_eq!(ledger.records()[0].id(), first_id);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ledger = Ledger::new();
        ledger.push(record("A", 100, "x"));
        assert_eq!(ledger.remove_many(&[RecordId::new()]), 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_can_append_bounds_both_signs() {
        let half = i64::MAX / 2;
        let mut ledger = Ledger::new();
        ledger.push(record("Big", half, "x"));
        ledger.push(record("Refund", -half, "x"));

        assert!(ledger.can_append(Money::from_cents(half)));
        assert!(!ledger.can_append(Money::from_cents(half + 2)));
        assert!(ledger.can_append(Money::from_cents(-half)));
        assert!(!ledger.can_append(Money::from_cents(-half - 3)));

        // The negative record offsetting the sum does not make room for more
        ledger.push(record("Big", half, "x"));
        assert!(!ledger.can_append(Money::from_cents(half)));
    }

    #[test]
    fn test_clear() {
        let mut ledger = Ledger::new();
        ledger.push(record("A", 100, "x"));
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), Money::zero());
    }

    #[test]
    fn test_find_first_case_insensitive() {
        let mut ledger = Ledger::new();
        let coffee = record("Coffee", 350, "Food");
        let bus = record("Bus", 200, "Transport");
        let bus_id = bus.id();
        ledger.push(coffee);
        ledger.push(bus);

        assert_eq!(ledger.find_first("bus").map(|r| r.id()), Some(bus_id));
        assert_eq!(ledger.find_first("TRANS").map(|r| r.id()), Some(bus_id));
        assert!(ledger.find_first("zzz").is_none());
    }

    #[test]
    fn test_find_first_returns_earliest_match() {
        let mut ledger = Ledger::new();
        let snack = record("Snack", 150, "Food");
        let snack_id = snack.id();
        ledger.push(snack);
        ledger.push(record("Dinner", 2000, "Food"));

        assert_eq!(ledger.find_first("food").map(|r| r.id()), Some(snack_id));
        assert_eq!(ledger.position(snack_id), Some(0));
    }
}
