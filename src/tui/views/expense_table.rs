//! Expense table view
//!
//! One row per record in insertion order, with a marker on selected rows.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::{App, FocusedField};

/// Render the expense table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused == FocusedField::Table;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let title = if app.multi_select_mode {
        format!(" Expenses ({} selected) ", app.controller.selection().len())
    } else {
        " Expenses ".to_string()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let ledger = app.controller.ledger();
    if ledger.is_empty() {
        let text = Paragraph::new("No expenses yet. Fill in the form and press Enter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(2),  // Selection
        Constraint::Min(16),    // Name
        Constraint::Length(14), // Amount
        Constraint::Length(16), // Category
        Constraint::Length(20), // Date
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Name").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Date").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.controller.currency_symbol();
    let timestamp_format = app.settings.timestamp_format.as_str();

    let rows: Vec<Row> = ledger
        .records()
        .iter()
        .map(|record| {
            let marker = if app.controller.is_selected(record.id()) {
                "■"
            } else {
                ""
            };

            let amount_style = if record.amount().is_negative() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };

            Row::new(vec![
                Cell::from(marker).style(Style::default().fg(Color::Cyan)),
                Cell::from(record.name().to_string()),
                Cell::from(record.amount().format_with_symbol(symbol)).style(amount_style),
                Cell::from(record.category().to_string()),
                Cell::from(record.format_timestamp(timestamp_format)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}
