use crate::keymap::Action;
use crossterm::event::KeyCode;

/// A text input field with encapsulated state.
///
/// Wraps the text and cursor position so form screens can own their field
/// values directly instead of reading them back out of rendered widgets.
///
/// # Example
/// ```
/// use plateful::utils::text_input::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('h');
/// input.insert_char('i');
/// assert_eq!(input.text(), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Create a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Get the current text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the current cursor position (in characters).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the trimmed text.
    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Check if the text is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Clear the text and reset cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let byte_index = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.text.len());
        self.text.insert(byte_index, c);
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let before = self.text.chars().take(self.cursor - 1);
            let after = self.text.chars().skip(self.cursor);
            self.text = before.chain(after).collect();
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let before = self.text.chars().take(self.cursor);
            let after = self.text.chars().skip(self.cursor + 1);
            self.text = before.chain(after).collect();
        }
    }

    /// Move the cursor left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Handle a raw key code event.
    ///
    /// Returns true if the key was handled.
    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Handle an action from the keymap.
    ///
    /// Returns true if the action was handled.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Check if an action is safe to process while a text input is focused.
    ///
    /// Returns true for navigation and editing actions. Returns false for
    /// actions bound to plain letters (like `Quit` on 'q') so the key is
    /// treated as text input instead.
    pub fn is_action_allowed_when_focused(action: Action) -> bool {
        matches!(
            action,
            Action::Cancel
                | Action::Confirm
                | Action::NextTab
                | Action::PrevTab
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_char_mid_text() {
        let mut input = TextInput::with_text("hello");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert_char('x');
        assert_eq!(input.text(), "hexllo");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_insert_ignores_control_chars() {
        let mut input = TextInput::new();
        input.insert_char('\u{8}');
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_backspace() {
        let mut input = TextInput::with_text("hello");
        input.backspace();
        assert_eq!(input.text(), "hell");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::with_text("hello");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::with_text("hello");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "ello");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = TextInput::with_text("hello");
        input.move_home();
        assert_eq!(input.cursor(), 0);
        input.move_right();
        assert_eq!(input.cursor(), 1);
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.move_end();
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_unicode_insertion() {
        let mut input = TextInput::with_text("héllo");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert_char('x');
        assert_eq!(input.text(), "héxllo");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_handle_key() {
        let mut input = TextInput::new();
        assert!(input.handle_key(KeyCode::Char('a')));
        assert!(input.handle_key(KeyCode::Char('b')));
        assert_eq!(input.text(), "ab");
        assert!(input.handle_key(KeyCode::Backspace));
        assert_eq!(input.text(), "a");
        assert!(!input.handle_key(KeyCode::Tab));
    }

    #[test]
    fn test_handle_action() {
        let mut input = TextInput::with_text("hello");
        assert!(input.handle_action(Action::Home));
        assert_eq!(input.cursor(), 0);
        assert!(input.handle_action(Action::DeleteChar));
        assert_eq!(input.text(), "ello");
        assert!(!input.handle_action(Action::Quit));
    }

    #[test]
    fn test_is_empty_whitespace_only() {
        let input = TextInput::with_text("   ");
        assert!(input.is_empty());
        assert_eq!(input.text_trimmed(), "");
    }

    #[test]
    fn test_is_action_allowed_when_focused() {
        assert!(TextInput::is_action_allowed_when_focused(Action::Cancel));
        assert!(TextInput::is_action_allowed_when_focused(Action::Confirm));
        assert!(TextInput::is_action_allowed_when_focused(Action::NextTab));
        assert!(TextInput::is_action_allowed_when_focused(Action::Backspace));

        // Plain-letter bindings must be suppressed so typing works
        assert!(!TextInput::is_action_allowed_when_focused(Action::Quit));
        assert!(!TextInput::is_action_allowed_when_focused(
            Action::ToggleTheme
        ));
        assert!(!TextInput::is_action_allowed_when_focused(
            Action::ToggleSelect
        ));
    }
}
