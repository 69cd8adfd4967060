//! Operator-facing terminal interaction.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for the interactive terminal
//! - [`MockUI`] for tests
//! - Interruptible prompts, the guided license menu, spinners and tables
//!
//! # Example
//!
//! ```
//! use lcns::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("author", "Ada Lovelace");
//!
//! let answer = ui
//!     .prompt(&Prompt::input("author", "Input fullname of author", "Jane"))
//!     .unwrap();
//! assert_eq!(answer.as_string(), "Ada Lovelace");
//! ```

pub mod choose;
pub mod mock;
pub mod prompts;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use choose::{choose, CHOOSE_TEXT};
pub use mock::{MockSpinner, MockUI};
pub use prompts::{
    parse_choice, InterruptHub, InvalidChoice, LineSource, Prompter, ScriptedLines, StdinLines,
};
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, LcnsTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// Status text goes to the operator (stderr on a terminal); [`output`]
/// carries the program's actual output (stdout).
///
/// [`output`]: UserInterface::output
pub trait UserInterface {
    /// Display a message to the operator.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Write program output, such as the license list.
    fn output(&mut self, text: &str);

    /// Show a prompt and wait for the answer.
    ///
    /// Fails with [`LcnsError::Interrupted`](crate::LcnsError::Interrupted)
    /// when the operator presses Ctrl-C.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Stop the spinner and clear it.
    fn finish_clear(&mut self);

    /// Stop the spinner and leave `msg` in its place.
    fn finish_error(&mut self, msg: &str);
}

/// A prompt to show to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Stable key identifying the question (used by [`MockUI`]).
    pub key: String,
    /// The question to display. Number prompts print their own question.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
}

impl Prompt {
    /// A number prompt accepting `1..=max`.
    pub fn number(key: &str, max: usize, default: usize) -> Self {
        Self {
            key: key.to_string(),
            question: String::new(),
            prompt_type: PromptType::Number { max, default },
        }
    }

    /// A free-form text prompt.
    pub fn input(key: &str, question: &str, default: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input {
                default: default.to_string(),
            },
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptType {
    /// Pick a number from 1 to `max`.
    Number { max: usize, default: usize },
    /// Free-form text input.
    Input { default: String },
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Answer to a number prompt.
    Number(usize),
    /// Answer to a text prompt.
    String(String),
}

impl PromptResult {
    /// Get as string, suitable for substitution.
    pub fn as_string(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Get as number if this is a Number result.
    pub fn as_number(&self) -> Option<usize> {
        match self {
            Self::Number(n) => Some(*n),
            Self::String(_) => None,
        }
    }
}
