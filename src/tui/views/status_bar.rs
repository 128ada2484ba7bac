//! Status bar view
//!
//! Shows the running total and key hints for the focused field

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FocusedField};
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};

/// Render the total label, right-aligned above the status bar
pub fn render_total(frame: &mut Frame, app: &mut App, area: Rect) {
    let total = Paragraph::new(format!("{} ", app.controller.total_label()))
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Right);

    frame.render_widget(total, area);
}

/// Render the key hint line
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let contexts: &[KeyContext] = if app.has_dialog() {
        &[KeyContext::Dialog]
    } else {
        match app.focused {
            FocusedField::Category => &[KeyContext::Entry, KeyContext::Category, KeyContext::Global],
            FocusedField::Name | FocusedField::Amount => &[KeyContext::Entry, KeyContext::Global],
            FocusedField::Search => &[KeyContext::Search, KeyContext::Global],
            FocusedField::Table => &[KeyContext::Table, KeyContext::Global],
        }
    };

    let mut spans = vec![Span::raw(" ")];
    for kb in get_keybindings(contexts) {
        spans.push(Span::styled(
            format_keybinding(kb),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(":{}  ", kb.description),
            Style::default().fg(Color::White),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
