//! Interactive terminal UI.

use console::Term;
use std::io::Write;
use std::sync::Arc;

use crate::error::Result;

use super::{
    should_use_colors, InterruptHub, LcnsTheme, LineSource, ProgressSpinner, Prompt,
    PromptResult, PromptType, Prompter, SpinnerHandle, StdinLines, UserInterface,
};

/// Terminal UI: status and prompts on stderr, program output on stdout.
pub struct TerminalUI {
    term: Term,
    out: Term,
    theme: LcnsTheme,
    prompter: Prompter<Term>,
}

impl TerminalUI {
    /// Create a terminal UI reading answers from standard input.
    pub fn new(interrupts: InterruptHub) -> Self {
        Self::with_lines(Arc::new(StdinLines), interrupts)
    }

    /// Create a terminal UI reading answers from `lines`.
    pub fn with_lines(lines: Arc<dyn LineSource>, interrupts: InterruptHub) -> Self {
        let theme = if should_use_colors() {
            LcnsTheme::new()
        } else {
            LcnsTheme::plain()
        };
        let term = Term::stderr();

        Self {
            prompter: Prompter::new(lines, interrupts, term.clone()),
            term,
            out: Term::stdout(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn output(&mut self, text: &str) {
        write!(self.out, "{}", text).ok();
        self.out.flush().ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        match &prompt.prompt_type {
            PromptType::Number { max, default } => self
                .prompter
                .ask_number(*max, *default)
                .map(PromptResult::Number),
            PromptType::Input { default } => self
                .prompter
                .ask_string(&prompt.question, default)
                .map(PromptResult::String),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.term.is_term() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}
