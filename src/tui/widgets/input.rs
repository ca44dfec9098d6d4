//! Text input widget
//!
//! A single-line text field with a character-based cursor

use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position, in characters
    cursor: usize,
    /// Placeholder text shown while empty and unfocused
    placeholder: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
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

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Styled spans for inline rendering, with a block cursor when focused
    pub fn spans(&self, focused: bool) -> Vec<Span<'static>> {
        if self.content.is_empty() && !focused {
            return vec![Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            )];
        }

        let text_style = Style::default().fg(Color::White);
        if !focused {
            return vec![Span::styled(self.content.clone(), text_style)];
        }

        let split = self.byte_offset(self.cursor);
        let (before, after) = self.content.split_at(split);
        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');

        vec![
            Span::styled(before.to_string(), text_style),
            Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled(rest.collect::<String>(), text_style),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = typed("abc");
        assert_eq!(input.value(), "abc");
        input.backspace();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("héllo");
        input.move_start();
        input.move_right();
        input.delete();
        assert_eq!(input.value(), "hllo");
        input.insert('é');
        assert_eq!(input.value(), "héllo");
        input.move_end();
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = typed("note");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
        input.backspace();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_placeholder_when_unfocused() {
        let input = TextInput::new().placeholder("Please specify");
        let spans = input.spans(false);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "Please specify");
    }
}
