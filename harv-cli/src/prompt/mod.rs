//! Interactive terminal prompts: a filterable single-selection list and a
//! single-line text input, driven by a blocking key-event loop in a scoped
//! raw-mode session.

mod filter;
mod input;
mod select;
mod session;

use crossterm::event::KeyEvent;
use thiserror::Error;

pub use input::{InputPrompt, TextInput};
pub use select::SelectPrompt;

#[derive(Error, Debug)]
pub enum PromptError {
    /// The user backed out of the prompt. Callers are expected to end the
    /// whole run with a success exit, not to recover.
    #[error("prompt cancelled")]
    Cancelled,
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a key event did to the active widget.
pub(crate) enum Transition<T> {
    /// State may have changed; redraw and keep reading keys.
    Continue,
    /// The widget resolved to its final value.
    Accept(T),
    /// The user cancelled the interaction.
    Cancel,
}

pub(crate) trait PromptWidget {
    type Output;

    fn handle_key(&mut self, key: KeyEvent) -> Transition<Self::Output>;
    fn lines(&self) -> Vec<String>;
}

/// Lets the user pick one item; returns the index into `options`.
pub fn select(options: &[String], message: &str) -> Result<usize, PromptError> {
    session::run(SelectPrompt::new(options, message))
}

/// Picks from a fixed list without type-to-filter.
#[allow(dead_code)]
pub fn select_plain(options: &[String], message: &str) -> Result<usize, PromptError> {
    session::run(SelectPrompt::without_filter(options, message))
}

/// Asks the user for a single line of text, seeded with `default_text`.
pub fn input(message: &str, default_text: &str) -> Result<String, PromptError> {
    session::run(InputPrompt::new(message, default_text))
}
