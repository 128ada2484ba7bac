//! Entry form and search line

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::form_rows;

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Render the Name, Amount and Category fields
pub fn render_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Add Expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style(app.focused.is_entry()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name, amount, category] = form_rows(inner);
    frame.render_widget(&app.name_input, name);
    frame.render_widget(&app.amount_input, amount);
    frame.render_widget(&app.category_input, category);
}

/// Render the search field
pub fn render_search(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(app.search_input.focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app.search_input, inner);
}
