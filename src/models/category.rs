//! Category suggestions
//!
//! The Category field accepts any text; these are only the values offered when
//! cycling through suggestions.

/// Suggestions shipped with the default settings
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Entertainment",
    "Shopping",
    "Bills",
    "Education",
    "Other",
];

/// Pick the suggestion after (or before) `current` in `suggestions`
///
/// Text that is not itself a suggestion starts the cycle at the first entry
/// (forward) or the last entry (backward). Returns `None` when there is
/// nothing to suggest.
pub fn cycle_suggestion<'a>(
    suggestions: &'a [String],
    current: &str,
    forward: bool,
) -> Option<&'a str> {
    if suggestions.is_empty() {
        return None;
    }

    let len = suggestions.len();
    let next = match suggestions.iter().position(|s| s == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };

    Some(suggestions[next].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_cycle_from_free_text() {
        let list = defaults();
        assert_eq!(cycle_suggestion(&list, "", true), Some("Food"));
        assert_eq!(cycle_suggestion(&list, "Groceries", false), Some("Other"));
    }

    #[test]
    fn test_cycle_wraps() {
        let list = defaults();
        assert_eq!(cycle_suggestion(&list, "Food", true), Some("Transport"));
        assert_eq!(cycle_suggestion(&list, "Other", true), Some("Food"));
        assert_eq!(cycle_suggestion(&list, "Food", false), Some("Other"));
    }

    #[test]
    fn test_cycle_empty_list() {
        assert_eq!(cycle_suggestion(&[], "Food", true), None);
    }
}
