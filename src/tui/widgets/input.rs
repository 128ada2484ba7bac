//! Text input widget
//!
//! A single-line text field with a character cursor

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Width reserved for field labels so values line up
const LABEL_WIDTH: usize = 10;

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the content and put the cursor at the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let label_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![Span::styled(
            format!("{:>width$}: ", self.label, width = LABEL_WIDTH),
            label_style,
        )];

        if self.content.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        } else if self.focused {
            let before: String = self.content.chars().take(self.cursor).collect();
            let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
            let after: String = self.content.chars().skip(self.cursor + 1).collect();

            spans.push(Span::styled(before, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::styled(after, Style::default().fg(Color::White)));
        } else {
            spans.push(Span::styled(
                self.content.as_str(),
                Style::default().fg(Color::Yellow),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Lunch".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Lunch");
        input.backspace();
        assert_eq!(input.value(), "Lunc");
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_cursor_editing_in_middle() {
        let mut input = TextInput::new();
        input.set_content("Tax");
        input.move_start();
        input.delete();
        input.insert('M');
        assert_eq!(input.value(), "Max");
        input.move_end();
        input.insert('i');
        assert_eq!(input.value(), "Maxi");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new();
        input.set_content("Café");
        input.move_left();
        input.insert('ï');
        assert_eq!(input.value(), "Cafïé");
        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "Cafï");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().label("Name").placeholder("e.g. Lunch");
        input.set_content("abc");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
        assert_eq!(input.label, "Name");
    }

    #[test]
    fn test_render_shows_placeholder_when_blurred() {
        let input = TextInput::new().label("Amount").placeholder("0.00");
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        let line: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(line.contains("Amount: 0.00"));
    }
}
