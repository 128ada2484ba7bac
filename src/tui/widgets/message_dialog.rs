//! Warning dialog widget
//!
//! A modal box for blocking warnings. While one is open every key other than
//! Enter/Esc is swallowed.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Content of a warning dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageInfo {
    pub title: String,
    pub details: String,
}

impl MessageInfo {
    pub fn new(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
        }
    }
}

/// Widget for rendering a warning dialog
pub struct MessageDialog<'a> {
    message: &'a MessageInfo,
}

impl<'a> MessageDialog<'a> {
    pub fn new(message: &'a MessageInfo) -> Self {
        Self { message }
    }
}

impl<'a> Widget for MessageDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" ! {} ", self.message.title))
            .title_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(1),    // Details
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.message.details.as_str())
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        Paragraph::new("Press Enter or Esc to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}

/// Calculate the area for a warning dialog (centered in parent)
pub fn message_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width / 10 * 6).clamp(30, 60).min(parent.width);
    let height = 7.min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_area_centered() {
        let area = message_dialog_area(Rect::new(0, 0, 100, 40));
        assert_eq!(area.width, 60);
        assert_eq!(area.height, 7);
        assert_eq!(area.x, 20);
        assert_eq!(area.y, 16);
    }

    #[test]
    fn test_dialog_area_very_wide_terminal() {
        let area = message_dialog_area(Rect::new(0, 0, 1200, 40));
        assert_eq!(area, Rect::new(570, 16, 60, 7));

        let widest = message_dialog_area(Rect::new(0, 0, u16::MAX, 40));
        assert_eq!(widest.width, 60);
    }

    #[test]
    fn test_dialog_area_tiny_terminal() {
        let area = message_dialog_area(Rect::new(0, 0, 20, 5));
        assert_eq!(area, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_render_contains_message() {
        let info = MessageInfo::new("Input Error", "All fields must be filled!");
        let area = Rect::new(0, 0, 50, 7);
        let mut buf = Buffer::empty(area);
        MessageDialog::new(&info).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Input Error"));
        assert!(text.contains("All fields must be filled!"));
    }
}
