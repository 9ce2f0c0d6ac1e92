use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::filter::filter_indices;
use super::input::TextInput;
use super::{PromptWidget, Transition};

/// Single-selection list with optional type-to-filter.
///
/// The filtered view is recomputed from the full option list on every query
/// change and the cursor always addresses a row of that view, so a shrinking
/// or growing view can never leave the cursor out of bounds.
pub struct SelectPrompt {
    message: String,
    options: Vec<String>,
    query: TextInput,
    /// Indices into `options`, in display order.
    filtered: Vec<usize>,
    cursor: usize,
    filtering: bool,
}

impl SelectPrompt {
    pub fn new(options: &[String], message: &str) -> Self {
        Self {
            message: message.to_string(),
            options: options.to_vec(),
            query: TextInput::new(),
            filtered: (0..options.len()).collect(),
            cursor: 0,
            filtering: true,
        }
    }

    /// A fixed list without the filter line; typing is ignored.
    pub fn without_filter(options: &[String], message: &str) -> Self {
        Self {
            filtering: false,
            ..Self::new(options, message)
        }
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(&self.options, &self.query.value);
        self.cursor = 0;
    }

    /// Index of the highlighted item in the original option list, if the
    /// filtered view is non-empty.
    fn selected_index(&self) -> Option<usize> {
        self.filtered.get(self.cursor).copied()
    }
}

impl PromptWidget for SelectPrompt {
    type Output = usize;

    fn handle_key(&mut self, key: KeyEvent) -> Transition<usize> {
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.cursor + 1 < self.filtered.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.cursor + 1 < self.filtered.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => {
                // Enter with an empty view has nothing to accept; wait until
                // the query matches again or is cleared.
                if let Some(index) = self.selected_index() {
                    return Transition::Accept(index);
                }
            }
            KeyCode::Esc => return Transition::Cancel,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Transition::Cancel;
            }
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.filtering && !self.query.value.is_empty() {
                    self.query.clear();
                    self.refilter();
                }
            }
            KeyCode::Backspace => {
                if self.filtering && !self.query.value.is_empty() {
                    self.query.backspace();
                    self.refilter();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.filtering {
                    self.query.insert(c);
                    self.refilter();
                }
            }
            _ => {}
        }
        Transition::Continue
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.message.clone()];
        if self.filtering {
            lines.push(format!("filtering by: {}", self.query.value));
        }
        for (row, &index) in self.filtered.iter().enumerate() {
            let prefix = if row == self.cursor { "\u{279c} " } else { "  " };
            lines.push(format!("{} {}", prefix, self.options[index]));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn sample() -> SelectPrompt {
        let options = ["Alpha", "Beta", "Gamma"].map(String::from);
        SelectPrompt::new(&options, "Select a project:")
    }

    fn type_str(prompt: &mut SelectPrompt, text: &str) {
        for c in text.chars() {
            prompt.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn accept_maps_back_to_the_original_index() {
        // Query "a" keeps Alpha and Gamma; row 1 is Gamma, original index 2.
        let mut prompt = sample();
        type_str(&mut prompt, "a");
        prompt.handle_key(key(KeyCode::Down));

        let transition = prompt.handle_key(key(KeyCode::Enter));
        assert!(matches!(transition, Transition::Accept(2)));
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut prompt = sample();
        prompt.handle_key(key(KeyCode::Up));
        assert_eq!(prompt.cursor, 0);

        prompt.handle_key(key(KeyCode::Down));
        prompt.handle_key(key(KeyCode::Down));
        prompt.handle_key(key(KeyCode::Down));
        assert_eq!(prompt.cursor, 2);
    }

    #[test]
    fn ctrl_j_and_ctrl_k_move_the_cursor() {
        let mut prompt = sample();
        prompt.handle_key(ctrl('j'));
        assert_eq!(prompt.cursor, 1);
        prompt.handle_key(ctrl('k'));
        assert_eq!(prompt.cursor, 0);
    }

    #[test]
    fn typing_resets_the_cursor() {
        let mut prompt = sample();
        prompt.handle_key(key(KeyCode::Down));
        assert_eq!(prompt.cursor, 1);

        type_str(&mut prompt, "g");
        assert_eq!(prompt.cursor, 0);
        assert_eq!(prompt.filtered, vec![2]);
    }

    #[test]
    fn backspace_recomputes_from_the_full_list() {
        // "ab" matches nothing; one backspace must show the same view as
        // typing "a" directly.
        let mut prompt = sample();
        type_str(&mut prompt, "ab");
        assert!(prompt.filtered.is_empty());

        prompt.handle_key(key(KeyCode::Backspace));
        let after_backspace = prompt.filtered.clone();

        let mut direct = sample();
        type_str(&mut direct, "a");
        assert_eq!(after_backspace, direct.filtered);
    }

    #[test]
    fn backspace_on_empty_query_keeps_the_cursor() {
        let mut prompt = sample();
        prompt.handle_key(key(KeyCode::Down));
        prompt.handle_key(key(KeyCode::Backspace));
        assert_eq!(prompt.cursor, 1);
        assert_eq!(prompt.filtered, vec![0, 1, 2]);
    }

    #[test]
    fn enter_on_empty_view_is_a_noop() {
        let mut prompt = sample();
        type_str(&mut prompt, "zzz");
        assert!(prompt.filtered.is_empty());
        assert!(matches!(prompt.handle_key(key(KeyCode::Enter)), Transition::Continue));

        // Clearing the query makes the list selectable again.
        prompt.handle_key(ctrl('x'));
        assert!(matches!(prompt.handle_key(key(KeyCode::Enter)), Transition::Accept(0)));
    }

    #[test]
    fn down_on_empty_view_is_a_noop() {
        let mut prompt = sample();
        type_str(&mut prompt, "zzz");
        prompt.handle_key(key(KeyCode::Down));
        assert_eq!(prompt.cursor, 0);
    }

    #[test]
    fn cancellation_is_distinct_from_acceptance() {
        let mut prompt = sample();
        assert!(matches!(prompt.handle_key(key(KeyCode::Esc)), Transition::Cancel));

        let mut prompt = sample();
        assert!(matches!(prompt.handle_key(ctrl('c')), Transition::Cancel));
    }

    #[test]
    fn plain_variant_ignores_typing() {
        let options = ["Alpha", "Beta", "Gamma"].map(String::from);
        let mut prompt = SelectPrompt::without_filter(&options, "Select:");
        type_str(&mut prompt, "gamma");
        assert_eq!(prompt.filtered, vec![0, 1, 2]);
        assert!(prompt.query.value.is_empty());

        let transition = prompt.handle_key(key(KeyCode::Enter));
        assert!(matches!(transition, Transition::Accept(0)));
    }

    #[test]
    fn marker_follows_the_cursor_row() {
        let mut prompt = sample();
        prompt.handle_key(key(KeyCode::Down));
        let lines = prompt.lines();
        assert!(lines[2].starts_with("  "));
        assert!(lines[3].starts_with('\u{279c}'));
    }
}
