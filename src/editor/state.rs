//! The modal editor's state and key-handling transition table.

use super::keys::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Normal,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub filename: String,
    pub original_content: String,
    pub content: String,
    pub lines: Vec<String>,
    pub cursor: Cursor,
    pub mode: EditorMode,
    pub is_modified: bool,
    pub scroll_offset: usize,
    pub max_visible_lines: usize,
    pub status_message: Option<String>,
}

pub struct KeyResult {
    pub state: EditorState,
    pub should_close: bool,
}

fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return vec![String::new()];
    }
    content.split('\n').map(str::to_string).collect()
}

/// Open a fresh editor buffer on `content` at NORMAL mode, cursor at (0, 0).
pub fn create_editor_state(filename: &str, content: &str) -> EditorState {
    EditorState {
        filename: filename.to_string(),
        original_content: content.to_string(),
        content: content.to_string(),
        lines: split_lines(content),
        cursor: Cursor { line: 0, column: 0 },
        mode: EditorMode::Normal,
        is_modified: false,
        scroll_offset: 0,
        max_visible_lines: 24,
        status_message: None,
    }
}

impl EditorState {
    fn sync_content(&mut self) {
        self.content = self.lines.join("\n");
        self.is_modified = self.content != self.original_content;
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// NORMAL-mode column bound: the last character, never past it, except
    /// on an empty line.
    fn clamp_normal_column(&mut self) {
        let len = self.line_len(self.cursor.line);
        self.cursor.column = self.cursor.column.min(len.saturating_sub(1).max(0));
        if len == 0 {
            self.cursor.column = 0;
        }
    }

    fn clamp_insert_column(&mut self) {
        let len = self.line_len(self.cursor.line);
        self.cursor.column = self.cursor.column.min(len);
    }

    fn clamp_cursor(&mut self) {
        self.cursor.line = self.cursor.line.min(self.lines.len().saturating_sub(1));
        match self.mode {
            EditorMode::Normal => self.clamp_normal_column(),
            EditorMode::Insert => self.clamp_insert_column(),
        }
    }

    fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.cursor.line];
        let byte_idx = line.char_indices().nth(self.cursor.column).map(|(i, _)| i).unwrap_or(line.len());
        line.insert(byte_idx, c);
        self.cursor.column += 1;
        self.sync_content();
    }

    fn split_line_at_cursor(&mut self) {
        let line = self.lines[self.cursor.line].clone();
        let byte_idx = line.char_indices().nth(self.cursor.column).map(|(i, _)| i).unwrap_or(line.len());
        let (head, tail) = line.split_at(byte_idx);
        self.lines[self.cursor.line] = head.to_string();
        self.lines.insert(self.cursor.line + 1, tail.to_string());
        self.cursor.line += 1;
        self.cursor.column = 0;
        self.sync_content();
    }

    fn backspace(&mut self) {
        if self.cursor.column > 0 {
            let line = &mut self.lines[self.cursor.line];
            let byte_idx = line.char_indices().nth(self.cursor.column - 1).map(|(i, _)| i).unwrap();
            line.remove(byte_idx);
            self.cursor.column -= 1;
        } else if self.cursor.line > 0 {
            let current = self.lines.remove(self.cursor.line);
            self.cursor.line -= 1;
            self.cursor.column = self.line_len(self.cursor.line);
            self.lines[self.cursor.line].push_str(&current);
        }
        self.sync_content();
    }

    fn delete_forward(&mut self) {
        let len = self.line_len(self.cursor.line);
        if self.cursor.column < len {
            let line = &mut self.lines[self.cursor.line];
            let byte_idx = line.char_indices().nth(self.cursor.column).map(|(i, _)| i).unwrap();
            line.remove(byte_idx);
        } else if self.cursor.line + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor.line + 1);
            self.lines[self.cursor.line].push_str(&next);
        }
        self.sync_content();
    }

    fn move_cursor(&mut self, key: KeyEvent) {
        match key {
            KeyEvent::Left => self.cursor.column = self.cursor.column.saturating_sub(1),
            KeyEvent::Right => self.cursor.column += 1,
            KeyEvent::Up => self.cursor.line = self.cursor.line.saturating_sub(1),
            KeyEvent::Down => self.cursor.line = (self.cursor.line + 1).min(self.lines.len() - 1),
            KeyEvent::Home => self.cursor.column = 0,
            KeyEvent::End => self.cursor.column = self.line_len(self.cursor.line),
            KeyEvent::PageUp => self.cursor.line = self.cursor.line.saturating_sub(self.max_visible_lines),
            KeyEvent::PageDown => {
                self.cursor.line = (self.cursor.line + self.max_visible_lines).min(self.lines.len() - 1)
            }
            _ => {}
        }
        self.clamp_cursor();
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key {
            KeyEvent::Char('h') => self.move_cursor(KeyEvent::Left),
            KeyEvent::Char('l') => self.move_cursor(KeyEvent::Right),
            KeyEvent::Char('j') => self.move_cursor(KeyEvent::Down),
            KeyEvent::Char('k') => self.move_cursor(KeyEvent::Up),
            KeyEvent::Char('0') => self.cursor.column = 0,
            KeyEvent::Char('$') => self.clamp_cursor_to_line_end(),
            KeyEvent::Char('G') => {
                self.cursor.line = self.lines.len() - 1;
                self.clamp_cursor();
            }
            KeyEvent::Char('x') => {
                self.delete_forward();
                self.clamp_cursor();
            }
            KeyEvent::Char('X') => {
                if self.cursor.column > 0 {
                    self.cursor.column -= 1;
                    self.delete_forward();
                }
            }
            KeyEvent::Char('i') => self.mode = EditorMode::Insert,
            KeyEvent::Char('a') => {
                self.cursor.column = (self.cursor.column + 1).min(self.line_len(self.cursor.line));
                self.mode = EditorMode::Insert;
            }
            KeyEvent::Char('I') => {
                self.cursor.column = 0;
                self.mode = EditorMode::Insert;
            }
            KeyEvent::Char('A') => {
                self.cursor.column = self.line_len(self.cursor.line);
                self.mode = EditorMode::Insert;
            }
            KeyEvent::Char('o') => {
                self.lines.insert(self.cursor.line + 1, String::new());
                self.cursor.line += 1;
                self.cursor.column = 0;
                self.mode = EditorMode::Insert;
                self.sync_content();
            }
            KeyEvent::Char('O') => {
                self.lines.insert(self.cursor.line, String::new());
                self.cursor.column = 0;
                self.mode = EditorMode::Insert;
                self.sync_content();
            }
            _ => {}
        }
    }

    fn clamp_cursor_to_line_end(&mut self) {
        let len = self.line_len(self.cursor.line);
        self.cursor.column = len.saturating_sub(1);
    }

    fn handle_insert_key(&mut self, key: KeyEvent) {
        match key {
            KeyEvent::Escape => {
                self.mode = EditorMode::Normal;
                self.clamp_cursor();
            }
            KeyEvent::Char(c) => self.insert_char(c),
            KeyEvent::Enter => self.split_line_at_cursor(),
            KeyEvent::Backspace => self.backspace(),
            KeyEvent::Delete => self.delete_forward(),
            KeyEvent::Tab => {
                self.insert_char(' ');
                self.insert_char(' ');
            }
            KeyEvent::Left | KeyEvent::Right | KeyEvent::Up | KeyEvent::Down | KeyEvent::Home | KeyEvent::End
            | KeyEvent::PageUp | KeyEvent::PageDown => self.move_cursor(key),
        }
    }
}

/// Apply one key event, returning the updated state. Editor key handling
/// never closes the buffer — only ex-commands do.
pub fn handle_key(mut state: EditorState, key: KeyEvent) -> KeyResult {
    match state.mode {
        EditorMode::Normal => state.handle_normal_key(key),
        EditorMode::Insert => state.handle_insert_key(key),
    }
    KeyResult { state, should_close: false }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i_enters_insert_mode_at_same_column() {
        let state = create_editor_state("f.txt", "abc");
        let result = handle_key(state, KeyEvent::Char('i'));
        assert_eq!(result.state.mode, EditorMode::Insert);
        assert_eq!(result.state.cursor.column, 0);
    }

    #[test]
    fn a_advances_column_by_one_bounded() {
        let state = create_editor_state("f.txt", "abc");
        let result = handle_key(state, KeyEvent::Char('a'));
        assert_eq!(result.state.cursor.column, 1);
    }

    #[test]
    fn capital_a_jumps_to_line_end() {
        let state = create_editor_state("f.txt", "abc");
        let result = handle_key(state, KeyEvent::Char('A'));
        assert_eq!(result.state.cursor.column, 3);
    }

    #[test]
    fn o_inserts_line_below_at_column_zero() {
        let state = create_editor_state("f.txt", "abc\ndef");
        let result = handle_key(state, KeyEvent::Char('o'));
        assert_eq!(result.state.lines, vec!["abc".to_string(), String::new(), "def".to_string()]);
        assert_eq!(result.state.cursor, Cursor { line: 1, column: 0 });
        assert_eq!(result.state.mode, EditorMode::Insert);
    }

    #[test]
    fn inserting_text_advances_cursor_past_it() {
        let mut state = create_editor_state("f.txt", "");
        state.mode = EditorMode::Insert;
        let result = handle_key(state, KeyEvent::Char('h'));
        let result = handle_key(result.state, KeyEvent::Char('i'));
        assert_eq!(result.state.lines[0], "hi");
        assert_eq!(result.state.cursor.column, 2);
    }

    #[test]
    fn enter_splits_the_current_line() {
        let mut state = create_editor_state("f.txt", "abcdef");
        state.mode = EditorMode::Insert;
        state.cursor.column = 3;
        let result = handle_key(state, KeyEvent::Enter);
        assert_eq!(result.state.lines, vec!["abc".to_string(), "def".to_string()]);
        assert_eq!(result.state.cursor, Cursor { line: 1, column: 0 });
    }

    #[test]
    fn backspace_joins_lines_at_boundary() {
        let mut state = create_editor_state("f.txt", "abc\ndef");
        state.mode = EditorMode::Insert;
        state.cursor = Cursor { line: 1, column: 0 };
        let result = handle_key(state, KeyEvent::Backspace);
        assert_eq!(result.state.lines, vec!["abcdef".to_string()]);
        assert_eq!(result.state.cursor, Cursor { line: 0, column: 3 });
    }

    #[test]
    fn is_modified_reflects_content_equality_not_edit_history() {
        let state = create_editor_state("a.txt", "Hi");
        let state = handle_key(state, KeyEvent::Char('i')).state;
        let state = handle_key(state, KeyEvent::Char('x')).state;
        assert!(state.is_modified);
        let state = handle_key(state, KeyEvent::Backspace).state;
        assert_eq!(state.content, "Hi");
        assert!(!state.is_modified);
    }

    #[test]
    fn escape_returns_to_normal_mode() {
        let mut state = create_editor_state("f.txt", "abc");
        state.mode = EditorMode::Insert;
        let result = handle_key(state, KeyEvent::Escape);
        assert_eq!(result.state.mode, EditorMode::Normal);
    }
}
