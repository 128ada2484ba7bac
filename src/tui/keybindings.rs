//! Keybinding definitions
//!
//! The table the status bar draws its hints from. `handler` implements the
//! behaviour; keep the two in step.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: &'static str,
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere outside a dialog
    Global,
    /// Name, Amount and Category fields
    Entry,
    /// Category field only
    Category,
    /// Search field
    Search,
    /// Expense table
    Table,
    /// Warning dialog
    Dialog,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Add",
        context: KeyContext::Entry,
    },
    Keybinding {
        key: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        description: "Next suggestion",
        context: KeyContext::Category,
    },
    Keybinding {
        key: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        description: "Prev suggestion",
        context: KeyContext::Category,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Search",
        context: KeyContext::Search,
    },
    Keybinding {
        key: KeyCode::Char('j'),
        modifiers: KeyModifiers::NONE,
        description: "Down",
        context: KeyContext::Table,
    },
    Keybinding {
        key: KeyCode::Char('k'),
        modifiers: KeyModifiers::NONE,
        description: "Up",
        context: KeyContext::Table,
    },
    Keybinding {
        key: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        description: "Toggle",
        context: KeyContext::Table,
    },
    Keybinding {
        key: KeyCode::Char('v'),
        modifiers: KeyModifiers::NONE,
        description: "Multi-select",
        context: KeyContext::Table,
    },
    Keybinding {
        key: KeyCode::Char('d'),
        modifiers: KeyModifiers::NONE,
        description: "Delete",
        context: KeyContext::Table,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Deselect",
        context: KeyContext::Table,
    },
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        description: "Quit",
        context: KeyContext::Table,
    },
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Next field",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('d'),
        modifiers: KeyModifiers::CONTROL,
        description: "Delete",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('l'),
        modifiers: KeyModifiers::CONTROL,
        description: "Clear all",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('f'),
        modifiers: KeyModifiers::CONTROL,
        description: "Find",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Close",
        context: KeyContext::Dialog,
    },
];

/// Keybindings for a context, context-specific ones first
pub fn get_keybindings(contexts: &[KeyContext]) -> Vec<&'static Keybinding> {
    contexts
        .iter()
        .flat_map(|context| KEYBINDINGS.iter().filter(move |kb| kb.context == *context))
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let key_str = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        _ => format!("{:?}", kb.key),
    };

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{}", key_str)
    } else {
        key_str
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_order() {
        let bindings = get_keybindings(&[KeyContext::Search, KeyContext::Global]);
        assert_eq!(bindings[0].description, "Search");
        assert!(bindings
            .iter()
            .all(|kb| matches!(kb.context, KeyContext::Search | KeyContext::Global)));
    }

    #[test]
    fn test_format_keybinding() {
        let ctrl_l = KEYBINDINGS
            .iter()
            .find(|kb| kb.description == "Clear all")
            .unwrap();
        assert_eq!(format_keybinding(ctrl_l), "Ctrl+l");

        let suggestions: Vec<String> = get_keybindings(&[KeyContext::Category])
            .into_iter()
            .map(format_keybinding)
            .collect();
        assert_eq!(suggestions, vec!["↓", "↑"]);

        let space = KEYBINDINGS
            .iter()
            .find(|kb| kb.description == "Toggle")
            .unwrap();
        assert_eq!(format_keybinding(space), "Space");
    }
}
