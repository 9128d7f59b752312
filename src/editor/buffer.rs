use ropey::Rope;

/// Characters ropey treats as line breaks (`\r\n` counts as one).
const LINE_BREAKS: [char; 7] = [
    '\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}', '\u{2029}',
];

/// Cursor position in the source buffer.
///
/// Columns count characters, not bytes, so `§` moves like any other key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
    /// Column to return to when moving vertically through short lines.
    col_memory: usize,
}

impl Cursor {
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            col_memory: col,
        }
    }

    const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.col_memory = col;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The text being composed, backed by a rope.
///
/// Palette and format actions append at the end of the buffer; typing
/// edits at the cursor.
#[derive(Clone)]
pub struct SourceBuffer {
    rope: Rope,
    cursor: Cursor,
}

impl SourceBuffer {
    /// Create a buffer holding `text` with the cursor at its end.
    pub fn from_text(text: &str) -> Self {
        let mut buf = Self {
            rope: Rope::from_str(text),
            cursor: Cursor::default(),
        };
        buf.move_to_end();
        buf
    }

    pub fn empty() -> Self {
        Self::from_text("")
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// A line without its trailing newline.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx).to_string();
        Some(line.trim_end_matches(LINE_BREAKS).to_string())
    }

    /// Line length in characters, without the trailing newline.
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.chars().count())
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the whole buffer, cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.move_to_end();
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Append at the end of the buffer and move the cursor after it.
    pub fn append_str(&mut self, s: &str) {
        self.move_to_end();
        self.insert_str(s);
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.split_line();
            return;
        }
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, ch);
        self.set_cursor_char_idx(idx + 1);
    }

    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let idx = self.cursor_char_idx();
        self.rope.insert(idx, s);
        // Pasted text may break lines with `\r` alone; let the rope decide.
        self.set_cursor_char_idx(idx + s.chars().count());
    }

    pub fn split_line(&mut self) {
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, '\n');
        self.cursor.line += 1;
        self.cursor.set_col(0);
    }

    /// Backspace. Returns `true` if anything was removed.
    pub fn delete_back(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        if idx == 0 {
            return false;
        }
        // A CRLF line ending goes as a unit.
        let crlf = idx >= 2 && self.rope.char(idx - 2) == '\r' && self.rope.char(idx - 1) == '\n';
        let start = if crlf { idx - 2 } else { idx - 1 };
        self.rope.remove(start..idx);
        self.set_cursor_char_idx(start);
        true
    }

    /// Delete at the cursor. Returns `true` if anything was removed.
    pub fn delete_forward(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        if idx >= self.rope.len_chars() {
            return false;
        }
        // A CRLF line ending goes as a unit.
        let end = if self.rope.char(idx) == '\r'
            && idx + 1 < self.rope.len_chars()
            && self.rope.char(idx + 1) == '\n'
        {
            idx + 2
        } else {
            idx + 1
        };
        self.rope.remove(idx..end);
        true
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                if self.cursor.col > 0 {
                    self.cursor.set_col(self.cursor.col - 1);
                } else if self.cursor.line > 0 {
                    self.cursor.line -= 1;
                    self.cursor.set_col(self.line_len(self.cursor.line));
                }
            }
            Direction::Right => {
                if self.cursor.col < self.line_len(self.cursor.line) {
                    self.cursor.set_col(self.cursor.col + 1);
                } else if self.cursor.line + 1 < self.line_count() {
                    self.cursor.line += 1;
                    self.cursor.set_col(0);
                }
            }
            Direction::Up => {
                if self.cursor.line > 0 {
                    self.cursor.line -= 1;
                    self.cursor.col = self.cursor.col_memory.min(self.line_len(self.cursor.line));
                }
            }
            Direction::Down => {
                if self.cursor.line + 1 < self.line_count() {
                    self.cursor.line += 1;
                    self.cursor.col = self.cursor.col_memory.min(self.line_len(self.cursor.line));
                }
            }
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor.set_col(0);
    }

    pub fn move_end(&mut self) {
        self.cursor.set_col(self.line_len(self.cursor.line));
    }

    /// Move to a position, clamped to the buffer (mouse clicks).
    pub fn move_to(&mut self, line: usize, col: usize) {
        self.cursor.line = line.min(self.line_count().saturating_sub(1));
        self.cursor.set_col(col.min(self.line_len(self.cursor.line)));
    }

    pub fn move_to_end(&mut self) {
        let last = self.line_count().saturating_sub(1);
        self.cursor.line = last;
        self.cursor.set_col(self.line_len(last));
    }

    fn set_cursor_char_idx(&mut self, idx: usize) {
        let line = self.rope.char_to_line(idx);
        self.cursor.line = line;
        self.cursor.set_col(idx - self.rope.line_to_char(line));
    }

    fn cursor_char_idx(&self) -> usize {
        let line = self.cursor.line.min(self.line_count().saturating_sub(1));
        self.rope.line_to_char(line) + self.cursor.col.min(self.line_len(line))
    }
}

impl Default for SourceBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for SourceBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceBuffer")
            .field("chars", &self.rope.len_chars())
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = SourceBuffer::empty();
        assert!(buf.is_empty());
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
    }

    #[test]
    fn test_from_text_puts_cursor_at_end() {
        let buf = SourceBuffer::from_text("&4red\n&lbold");
        assert_eq!(buf.cursor(), Cursor::at(1, 6));
    }

    #[test]
    fn test_append_goes_to_end_regardless_of_cursor() {
        let mut buf = SourceBuffer::from_text("hello");
        buf.move_home();
        buf.append_str("§c");
        assert_eq!(buf.text(), "hello§c");
        assert_eq!(buf.cursor(), Cursor::at(0, 7));
    }

    #[test]
    fn test_insert_char_counts_section_sign_as_one_column() {
        let mut buf = SourceBuffer::empty();
        buf.insert_char('§');
        buf.insert_char('a');
        assert_eq!(buf.cursor().col, 2);
        buf.move_cursor(Direction::Left);
        buf.insert_char('x');
        assert_eq!(buf.text(), "§xa");
    }

    #[test]
    fn test_insert_str_multiline_moves_cursor() {
        let mut buf = SourceBuffer::empty();
        buf.insert_str("one\ntwo\nthree");
        assert_eq!(buf.cursor(), Cursor::at(2, 5));
        assert_eq!(buf.line_count(), 3);
    }

    #[test]
    fn test_insert_str_with_bare_carriage_returns_moves_cursor() {
        let mut buf = SourceBuffer::empty();
        buf.insert_str("one\rtwo");
        assert_eq!(buf.cursor(), Cursor::at(1, 3));
        buf.insert_char('!');
        assert_eq!(buf.text(), "one\rtwo!");
    }

    #[test]
    fn test_insert_str_with_crlf_moves_cursor() {
        let mut buf = SourceBuffer::from_text("end");
        buf.move_home();
        buf.insert_str("a\r\nb");
        assert_eq!(buf.cursor(), Cursor::at(1, 1));
        assert_eq!(buf.line_at(0), Some("a".to_string()));
        buf.insert_char('|');
        assert_eq!(buf.text(), "a\r\nb|end");
    }

    #[test]
    fn test_insert_newline_char_splits_line() {
        let mut buf = SourceBuffer::from_text("ab");
        buf.move_cursor(Direction::Left);
        buf.insert_char('\n');
        assert_eq!(buf.text(), "a\nb");
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_delete_back_at_start_is_noop() {
        let mut buf = SourceBuffer::from_text("x");
        buf.move_home();
        assert!(!buf.delete_back());
        assert_eq!(buf.text(), "x");
    }

    #[test]
    fn test_delete_back_removes_multibyte_char() {
        let mut buf = SourceBuffer::from_text("a§");
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "a");
        assert_eq!(buf.cursor().col, 1);
    }

    #[test]
    fn test_delete_back_joins_lines() {
        let mut buf = SourceBuffer::from_text("ab\ncd");
        buf.move_home();
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_delete_back_joins_crlf_lines() {
        let mut buf = SourceBuffer::from_text("ab\r\ncd");
        buf.move_home();
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_delete_back_joins_bare_cr_lines() {
        let mut buf = SourceBuffer::from_text("ab\rcd");
        buf.move_home();
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_delete_forward() {
        let mut buf = SourceBuffer::from_text("ab\ncd");
        assert!(!buf.delete_forward());
        buf.move_to(0, 2);
        assert!(buf.delete_forward());
        assert_eq!(buf.text(), "abcd");
    }

    #[test]
    fn test_vertical_movement_remembers_column() {
        let mut buf = SourceBuffer::from_text("long line\nab\nanother line");
        buf.move_to(0, 7);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor().col, 2);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor().col, 7);
    }

    #[test]
    fn test_horizontal_movement_wraps_lines() {
        let mut buf = SourceBuffer::from_text("ab\ncd");
        buf.move_to(1, 0);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_move_to_clamps() {
        let mut buf = SourceBuffer::from_text("ab\ncd");
        buf.move_to(9, 9);
        assert_eq!(buf.cursor(), Cursor::at(1, 2));
    }

    #[test]
    fn test_clear_and_set_text() {
        let mut buf = SourceBuffer::from_text("&4x");
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
        buf.set_text("&lBold");
        assert_eq!(buf.text(), "&lBold");
        assert_eq!(buf.cursor().col, 6);
    }
}
