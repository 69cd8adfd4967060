//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Prompt answers come from keyed or
//! queued responses, and any prompt key can be made to fail as if the
//! operator had pressed Ctrl-C.
//!
//! # Example
//!
//! ```
//! use lcns::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Fetching license list");
//! ui.output("mit\n");
//!
//! assert!(ui.has_message("Fetching"));
//! assert_eq!(ui.output_text(), "mit\n");
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use crate::error::{LcnsError, Result};

use super::{Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Lookup order for an answer: queued responses for the key, the single
/// response for the key, the catch-all response, then the prompt's default.
/// An empty answer also selects the prompt's default, as on a terminal.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    output: String,
    spinners: Vec<String>,
    spinner_failures: Rc<RefCell<Vec<String>>>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    default_prompt_response: Option<String>,
    interrupt_keys: HashSet<String>,
    prompts_shown: Vec<Prompt>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue answers for a prompt key asked several times.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Set the answer for any prompt key not configured otherwise.
    pub fn set_default_prompt_response(&mut self, response: &str) {
        self.default_prompt_response = Some(response.to_string());
    }

    /// Make prompts with this key fail with [`LcnsError::Interrupted`].
    pub fn interrupt_on(&mut self, key: &str) {
        self.interrupt_keys.insert(key.to_string());
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get everything written as program output.
    pub fn output_text(&self) -> &str {
        &self.output
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get the messages spinners were failed with, in order.
    pub fn spinner_failures(&self) -> Vec<String> {
        self.spinner_failures.borrow().clone()
    }

    /// Get all prompts that were shown, in order.
    pub fn prompts_shown(&self) -> &[Prompt] {
        &self.prompts_shown
    }

    /// Get the keys of all prompts that were shown, in order.
    pub fn prompt_keys(&self) -> Vec<&str> {
        self.prompts_shown.iter().map(|p| p.key.as_str()).collect()
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    fn next_response(&mut self, key: &str) -> Option<String> {
        if let Some(response) = self.prompt_queues.get_mut(key).and_then(|q| q.pop_front()) {
            return Some(response);
        }
        self.prompt_responses
            .get(key)
            .or(self.default_prompt_response.as_ref())
            .cloned()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn output(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.clone());

        if self.interrupt_keys.contains(&prompt.key) {
            return Err(LcnsError::Interrupted);
        }

        let response = self.next_response(&prompt.key).unwrap_or_default();
        match &prompt.prompt_type {
            PromptType::Number { max, default } => {
                let n = if response.trim().is_empty() {
                    *default
                } else {
                    response.trim().parse().map_err(|_| {
                        anyhow::anyhow!("Mock response {:?} is not a number", response)
                    })?
                };
                if n < 1 || n > *max {
                    return Err(
                        anyhow::anyhow!("Mock response {} is outside 1..={}", n, max).into(),
                    );
                }
                Ok(PromptResult::Number(n))
            }
            PromptType::Input { default } => {
                if response.is_empty() {
                    Ok(PromptResult::String(default.clone()))
                } else {
                    Ok(PromptResult::String(response))
                }
            }
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            failures: Rc::clone(&self.spinner_failures),
        })
    }
}

/// Mock spinner that reports failures back to its [`MockUI`].
#[derive(Debug)]
pub struct MockSpinner {
    failures: Rc<RefCell<Vec<String>>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_clear(&mut self) {}

    fn finish_error(&mut self, msg: &str) {
        self.failures.borrow_mut().push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.error("Oops");
        ui.output("mit\n");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.errors(), &["Oops"]);
        assert_eq!(ui.output_text(), "mit\n");
    }

    #[test]
    fn keyed_response_answers_input() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("author", "Ada Lovelace");

        let result = ui
            .prompt(&Prompt::input("author", "Input fullname of author", "Jane"))
            .unwrap();

        assert_eq!(result.as_string(), "Ada Lovelace");
        assert_eq!(ui.prompt_keys(), vec!["author"]);
    }

    #[test]
    fn unanswered_input_falls_back_to_default() {
        let mut ui = MockUI::new();

        let result = ui
            .prompt(&Prompt::input("email", "Input email", "jane@example.com"))
            .unwrap();

        assert_eq!(result.as_string(), "jane@example.com");
    }

    #[test]
    fn queued_responses_come_in_order() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("misc", vec!["first", "second"]);
        ui.set_prompt_response("misc", "fallback");

        let prompt = Prompt::input("misc", "Input", "(no replacement)");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "first");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "second");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "fallback");
    }

    #[test]
    fn default_response_applies_to_any_key() {
        let mut ui = MockUI::new();
        ui.set_default_prompt_response("anything");

        let result = ui.prompt(&Prompt::input("project", "Input project", "x"));
        assert_eq!(result.unwrap().as_string(), "anything");
    }

    #[test]
    fn number_prompt_parses_and_defaults() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("license", vec!["3", ""]);

        let prompt = Prompt::number("license", 4, 1);
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Number(3));
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Number(1));
    }

    #[test]
    fn number_prompt_rejects_out_of_range_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("license", "9");

        assert!(ui.prompt(&Prompt::number("license", 4, 1)).is_err());
    }

    #[test]
    fn interrupt_on_key_fails_prompt() {
        let mut ui = MockUI::new();
        ui.interrupt_on("email");

        let err = ui
            .prompt(&Prompt::input("email", "Input email", "x"))
            .unwrap_err();
        assert!(matches!(err, LcnsError::Interrupted));
        assert_eq!(ui.prompt_keys(), vec!["email"]);
    }

    #[test]
    fn spinner_messages_are_recorded() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Fetching mit");
        spinner.finish_clear();

        assert_eq!(ui.spinners(), &["Fetching mit"]);
    }

    #[test]
    fn spinner_failures_are_recorded() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Fetching license list");
        spinner.finish_error("Failed to fetch license list");

        assert_eq!(ui.spinner_failures(), vec!["Failed to fetch license list"]);
    }
}
