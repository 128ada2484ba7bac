//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate action based on the open
//! dialog and the focused field.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, FocusedField};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // A warning dialog blocks everything until dismissed
    if app.has_dialog() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_dialog();
        }
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        handle_control_key(app, key);
        return Ok(());
    }

    match key.code {
        KeyCode::Tab => {
            app.next_field();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.prev_field();
            return Ok(());
        }
        _ => {}
    }

    match app.focused {
        FocusedField::Table => handle_table_key(app, key),
        FocusedField::Search => handle_search_key(app, key),
        _ => handle_entry_key(app, key),
    }

    Ok(())
}

/// Ctrl shortcuts work from any field
fn handle_control_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') => app.quit(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('l') => app.clear_all(),
        KeyCode::Char('f') => app.set_focus(FocusedField::Search),
        _ => {}
    }
}

/// Keys in the Name, Amount and Category fields
fn handle_entry_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.add_expense(),
        KeyCode::Down if app.focused == FocusedField::Category => app.cycle_category(true),
        KeyCode::Up if app.focused == FocusedField::Category => app.cycle_category(false),
        _ => edit_focused_input(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.search(),
        _ => edit_focused_input(app, key),
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::PageUp => app.move_cursor(-10),
        KeyCode::Home | KeyCode::Char('g') => app.cursor_to_start(),
        KeyCode::End | KeyCode::Char('G') => app.cursor_to_end(),
        KeyCode::Char(' ') => app.toggle_at_cursor(),
        KeyCode::Char('v') => app.toggle_multi_select(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Esc => app.clear_selection(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

/// Plain text editing on whichever field has focus
fn edit_focused_input(app: &mut App, key: KeyEvent) {
    let Some(input) = app.focused_input() else {
        return;
    };

    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        handle_event(
            app,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        )
        .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add_via_keys(app: &mut App, name: &str, amount: &str, category: &str) {
        type_text(app, name);
        press(app, KeyCode::Tab);
        type_text(app, amount);
        press(app, KeyCode::Tab);
        type_text(app, category);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_add_with_keyboard() {
        let mut app = App::new(Settings::default());
        add_via_keys(&mut app, "Lunch", "12.5", "Food");

        assert_eq!(app.controller.ledger().len(), 1);
        assert_eq!(app.focused, FocusedField::Name);
        assert_eq!(app.controller.total_label(), "Total: $12.50");
    }

    #[test]
    fn test_dialog_blocks_input() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Enter);
        assert!(app.has_dialog());

        type_text(&mut app, "ignored");
        ctrl(&mut app, 'q');
        assert_eq!(app.name_input.value(), "");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_delete_without_selection_warns() {
        let mut app = App::new(Settings::default());
        add_via_keys(&mut app, "Bus", "2", "Transport");

        ctrl(&mut app, 'd');
        assert!(app.has_dialog());
        assert_eq!(app.controller.ledger().len(), 1);
    }

    #[test]
    fn test_table_navigation_and_delete() {
        let mut app = App::new(Settings::default());
        add_via_keys(&mut app, "Lunch", "12.5", "Food");
        add_via_keys(&mut app, "Taxi", "7", "Transport");

        app.set_focus(FocusedField::Table);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.controller.ledger().len(), 1);
        assert_eq!(app.controller.total_label(), "Total: $7.00");
    }

    #[test]
    fn test_space_builds_multi_selection() {
        let mut app = App::new(Settings::default());
        add_via_keys(&mut app, "A", "1", "x");
        add_via_keys(&mut app, "B", "2", "x");
        add_via_keys(&mut app, "C", "3", "x");

        app.set_focus(FocusedField::Table);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('v'));
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.selection().len(), 2);

        press(&mut app, KeyCode::Delete);
        assert_eq!(app.controller.ledger().len(), 1);
        assert_eq!(app.controller.ledger().records()[0].name(), "B");
        assert_eq!(app.controller.total_label(), "Total: $2.00");
    }

    #[test]
    fn test_space_on_cursor_row_deselects() {
        let mut app = App::new(Settings::default());
        add_via_keys(&mut app, "A", "1", "x");

        app.set_focus(FocusedField::Table);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.controller.selection().len(), 1);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.controller.selection().is_empty());

        press(&mut app, KeyCode::Char('d'));
        assert!(app.has_dialog());
        assert_eq!(app.controller.ledger().len(), 1);
    }

    #[test]
    fn test_search_and_clear_shortcuts() {
        let mut app = App::new(Settings::default());
        add_via_keys(&mut app, "Coffee", "3.50", "Food");
        add_via_keys(&mut app, "Bus", "2.00", "Transport");

        ctrl(&mut app, 'f');
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Enter);
        assert!(!app.has_dialog());
        assert!(app.controller.notifier().toasts().current().is_some());

        ctrl(&mut app, 'l');
        assert_eq!(app.controller.ledger().len(), 0);
        assert_eq!(app.controller.total_label(), "Total: $0.00");
    }

    #[test]
    fn test_category_suggestions_via_arrows() {
        let mut app = App::new(Settings::default());
        app.set_focus(FocusedField::Category);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.category_input.value(), "Transport");
    }

    #[test]
    fn test_q_types_in_fields_but_quits_from_table() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.name_input.value(), "q");
        assert!(!app.should_quit);

        app.set_focus(FocusedField::Table);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new(Settings::default());
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert_eq!(app.name_input.value(), "");
    }
}
