//! Single-line text buffer with a cursor, backing the task entry field.

use unicode_width::UnicodeWidthStr;

/// Text not yet committed to the list. The cursor is a byte offset that
/// always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The buffer with leading and trailing whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.buffer.trim()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// Terminal columns taken by the text before the cursor. Wide glyphs
    /// such as emoji count as two.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputState {
        let mut input = InputState::new();
        text.chars().for_each(|c| input.insert_char(c));
        input
    }

    #[test]
    fn test_new_is_empty() {
        let input = InputState::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
        assert_eq!(input.as_str(), "");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = typed("ac");
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_backspace_and_delete_at_edges_are_noops() {
        let mut input = typed("a");
        input.delete();
        assert_eq!(input.as_str(), "a");

        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "a");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_backspace_removes_previous_char() {
        let mut input = typed("abc");
        input.move_left();
        input.backspace();
        assert_eq!(input.as_str(), "ac");
        assert_eq!(input.cursor_pos(), 1);
    }

    #[test]
    fn test_delete_removes_char_at_cursor() {
        let mut input = typed("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "bc");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_home_end() {
        let mut input = typed("ab");
        input.move_home();
        assert_eq!(input.cursor_pos(), 0);
        input.move_end();
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_clear_and_set() {
        let mut input = typed("ab");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);

        input.set("hello");
        assert_eq!(input.as_str(), "hello");
        assert_eq!(input.cursor_pos(), 5);
    }

    #[test]
    fn test_insert_str_at_cursor() {
        let mut input = typed("milk");
        input.move_home();
        input.insert_str("Buy ");
        assert_eq!(input.as_str(), "Buy milk");
        assert_eq!(input.cursor_column(), 4);
    }

    #[test]
    fn test_cursor_column_counts_display_width() {
        let mut input = typed("\u{2705}\u{2705}\u{2705}");
        assert_eq!(input.cursor_column(), 6);
        input.move_left();
        assert_eq!(input.cursor_column(), 4);
        input.move_home();
        assert_eq!(input.cursor_column(), 0);
    }

    #[test]
    fn test_trimmed() {
        let input = typed("  Buy milk \t");
        assert_eq!(input.trimmed(), "Buy milk");
        assert_eq!(typed("   ").trimmed(), "");
    }

    #[test]
    fn test_multibyte_navigation() {
        let mut input = typed("a\u{00e9}\u{2705}");
        assert_eq!(input.cursor_pos(), 1 + 2 + 3);
        assert_eq!(input.cursor_column(), 1 + 1 + 2);

        input.move_left();
        assert_eq!(input.cursor_pos(), 3);
        input.backspace();
        assert_eq!(input.as_str(), "a\u{2705}");
        assert_eq!(input.cursor_pos(), 1);

        input.move_right();
        assert_eq!(input.cursor_pos(), 4);
        input.move_right();
        assert_eq!(input.cursor_pos(), 4);
    }
}
