//! TUI Views module
//!
//! The single expense screen: entry form, search line, table, total and
//! status bar, with toasts and the warning dialog drawn on top.

pub mod expense_table;
pub mod form;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::AppLayout;
use super::widgets::{message_dialog_area, notification_area, MessageDialog, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    form::render_form(frame, app, layout.form);
    form::render_search(frame, app, layout.search);
    expense_table::render(frame, app, layout.table);
    status_bar::render_total(frame, app, layout.total);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.controller.notifier().toasts().current() {
        let area = notification_area(layout.table);
        frame.render_widget(NotificationWidget::new(notification), area);
    }

    // Render dialog last so it sits above everything
    if let Some(message) = app.controller.notifier().dialog() {
        let area = message_dialog_area(frame.area());
        frame.render_widget(MessageDialog::new(message), area);
    }
}
