use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{PromptWidget, Transition};

const REVERSE: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

/// A single-line text buffer with mid-string cursor support. The cursor is a
/// byte offset that always sits on a character boundary; edits operate on
/// whole characters so multi-byte input is removed atomically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer pre-filled with `value`, cursor at the end.
    pub fn seeded(value: &str) -> Self {
        Self {
            cursor: value.len(),
            value: value.to_string(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor. No-op at the
    /// start of the buffer.
    pub fn backspace(&mut self) {
        if let Some((start, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    pub fn move_left(&mut self) {
        if let Some((start, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// The buffer split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }
}

/// Single-line text prompt, optionally seeded with a default value.
pub struct InputPrompt {
    message: String,
    buffer: TextInput,
}

impl InputPrompt {
    pub fn new(message: &str, default_text: &str) -> Self {
        Self {
            message: message.to_string(),
            buffer: TextInput::seeded(default_text),
        }
    }
}

impl PromptWidget for InputPrompt {
    type Output = String;

    fn handle_key(&mut self, key: KeyEvent) -> Transition<String> {
        match key.code {
            KeyCode::Enter => return Transition::Accept(self.buffer.value.clone()),
            KeyCode::Esc => return Transition::Cancel,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Transition::Cancel;
            }
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.clear();
            }
            KeyCode::Backspace => self.buffer.backspace(),
            KeyCode::Left => self.buffer.move_left(),
            KeyCode::Right => self.buffer.move_right(),
            KeyCode::Home => self.buffer.home(),
            KeyCode::End => self.buffer.end(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.insert(c);
            }
            _ => {}
        }
        Transition::Continue
    }

    fn lines(&self) -> Vec<String> {
        let (before, after) = self.buffer.split_at_cursor();
        let mut rest = after.chars();
        let line = match rest.next() {
            Some(under_cursor) => {
                format!("> {}{}{}{}{}", before, REVERSE, under_cursor, RESET, rest.as_str())
            }
            None => format!("> {}{} {}", before, REVERSE, RESET),
        };
        vec![self.message.clone(), line]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn type_str(prompt: &mut InputPrompt, text: &str) {
        for c in text.chars() {
            prompt.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn accepts_the_seeded_default_untouched() {
        let mut prompt = InputPrompt::new("Enter notes:", "standup");
        let transition = prompt.handle_key(key(KeyCode::Enter));
        assert!(matches!(transition, Transition::Accept(value) if value == "standup"));
    }

    #[test]
    fn edits_the_default_value() {
        // "hello", two backspaces, then 'p' -> "help".
        let mut prompt = InputPrompt::new("Enter notes:", "hello");
        prompt.handle_key(key(KeyCode::Backspace));
        prompt.handle_key(key(KeyCode::Backspace));
        type_str(&mut prompt, "p");

        let transition = prompt.handle_key(key(KeyCode::Enter));
        assert!(matches!(transition, Transition::Accept(value) if value == "help"));
    }

    #[test]
    fn space_is_an_ordinary_character() {
        let mut prompt = InputPrompt::new("Enter notes:", "");
        type_str(&mut prompt, "fix bug");

        let transition = prompt.handle_key(key(KeyCode::Enter));
        assert!(matches!(transition, Transition::Accept(value) if value == "fix bug"));
    }

    #[test]
    fn backspace_on_empty_buffer_is_a_noop() {
        let mut prompt = InputPrompt::new("Enter notes:", "");
        prompt.handle_key(key(KeyCode::Backspace));

        let transition = prompt.handle_key(key(KeyCode::Enter));
        assert!(matches!(transition, Transition::Accept(value) if value.is_empty()));
    }

    #[test]
    fn backspace_removes_whole_characters() {
        let mut prompt = InputPrompt::new("Enter notes:", "caf\u{e9}");
        prompt.handle_key(key(KeyCode::Backspace));

        let transition = prompt.handle_key(key(KeyCode::Enter));
        assert!(matches!(transition, Transition::Accept(value) if value == "caf"));
    }

    #[test]
    fn inserts_at_the_cursor_after_moving_left() {
        let mut prompt = InputPrompt::new("Enter notes:", "shp");
        prompt.handle_key(key(KeyCode::Left));
        type_str(&mut prompt, "i");

        let transition = prompt.handle_key(key(KeyCode::Enter));
        assert!(matches!(transition, Transition::Accept(value) if value == "ship"));
    }

    #[test]
    fn escape_cancels_instead_of_accepting() {
        let mut prompt = InputPrompt::new("Enter notes:", "half-typed");
        assert!(matches!(prompt.handle_key(key(KeyCode::Esc)), Transition::Cancel));
    }

    #[test]
    fn ctrl_c_cancels() {
        let mut prompt = InputPrompt::new("Enter notes:", "");
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(prompt.handle_key(ctrl_c), Transition::Cancel));
    }

    #[test]
    fn movement_respects_char_boundaries() {
        let mut input = TextInput::seeded("a\u{e9}b");
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.value, "\u{e9}b");
        assert_eq!(input.cursor, 0);

        input.end();
        assert_eq!(input.cursor, input.value.len());
    }
}
