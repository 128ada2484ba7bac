//! Layout definitions for the TUI
//!
//! Entry form on top, search line, expense table, total and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Name, Amount and Category fields
    pub form: Rect,
    /// Search field
    pub search: Rect,
    /// Expense table
    pub table: Rect,
    /// Running total
    pub total: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Three fields plus borders
                Constraint::Length(3), // Search
                Constraint::Min(3),    // Table
                Constraint::Length(1), // Total
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            form: chunks[0],
            search: chunks[1],
            table: chunks[2],
            total: chunks[3],
            status_bar: chunks[4],
        }
    }
}

/// One row per field inside the form block
pub fn form_rows(inner: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    [chunks[0], chunks[1], chunks[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.form.height, 5);
        assert_eq!(layout.search.y, 5);
        assert_eq!(layout.table.height, 24 - 5 - 3 - 2);
        assert_eq!(layout.status_bar.y, 23);
    }

    #[test]
    fn test_form_rows() {
        let rows = form_rows(Rect::new(1, 1, 40, 3));
        assert_eq!(rows[0].y, 1);
        assert_eq!(rows[2].y, 3);
    }
}
