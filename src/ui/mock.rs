//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Prompt responses and key presses are
//! scripted up front.
//!
//! # Example
//!
//! ```
//! use ghostnet_door::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("bbs_port", vec!["not-a-number", "2323"]);
//!
//! let prompt = Prompt::new("bbs_port", "BBS Port Number");
//! assert_eq!(ui.prompt(&prompt).unwrap(), "not-a-number");
//! assert_eq!(ui.prompt(&prompt).unwrap(), "2323");
//! assert_eq!(ui.prompts_shown(), ["bbs_port", "bbs_port"]);
//! ```

use std::collections::{HashMap, VecDeque};
use std::io;

use crate::error::Result;

use super::{Prompt, UserInterface};

/// Mock UI implementation for testing.
///
/// Running out of scripted keys or prompt responses reads as the caller
/// hanging up (`UnexpectedEof`), which ends menu loops and form re-prompts.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    inline: String,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    raw_lines: Vec<Vec<u8>>,
    clears: usize,
    keys: VecDeque<char>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response returned every time `key` is prompted.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response`.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Queue key presses, one per character.
    pub fn queue_keys(&mut self, keys: &str) {
        self.keys.extend(keys.chars());
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all text written inline, concatenated.
    pub fn inline_text(&self) -> &str {
        &self.inline
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all raw lines written.
    pub fn raw_lines(&self) -> &[Vec<u8>] {
        &self.raw_lines
    }

    /// Number of times the screen was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Number of scripted keys not yet read.
    pub fn keys_remaining(&self) -> usize {
        self.keys.len()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific header was shown.
    pub fn has_header(&self, title: &str) -> bool {
        self.headers.iter().any(|h| h.contains(title))
    }

    fn exhausted(what: &str) -> io::Error {
        io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("no scripted input left for {}", what),
        )
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn inline(&mut self, text: &str) {
        self.inline.push_str(text);
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn clear_screen(&mut self) {
        self.clears += 1;
    }

    fn write_raw_line(&mut self, bytes: &[u8]) {
        self.raw_lines.push(bytes.to_vec());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        // Check queued responses first (for keys called multiple times)
        if let Some(queue) = self.prompt_queues.get_mut(&prompt.key) {
            if let Some(response) = queue.pop_front() {
                return Ok(response);
            }
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(response.clone());
        }

        Err(Self::exhausted(&format!("prompt '{}'", prompt.key)).into())
    }

    fn read_key(&mut self) -> Result<char> {
        self.keys
            .pop_front()
            .ok_or_else(|| Self::exhausted("key press").into())
    }
}
