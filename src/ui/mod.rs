//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for the caller's terminal
//! - [`MockUI`] for tests
//! - ANSI escape tables in [`ansi`] and ANSI art display in [`art`]
//!
//! # Example
//!
//! ```
//! use ghostnet_door::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_keys("1q");
//! assert_eq!(ui.read_key().unwrap(), '1');
//! ui.success("Application saved successfully");
//! assert!(ui.has_success("saved"));
//! ```

pub mod ansi;
pub mod art;
pub mod mock;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use ansi::{move_cursor, print_at, trim_sauce, Escape, Font};
pub use art::display_ansi_file;
pub use mock::MockUI;
pub use prompts::prompt_user;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DoorTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display text and leave the cursor after it, for inline prompts.
    fn inline(&mut self, text: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Clear the screen and home the cursor.
    fn clear_screen(&mut self);

    /// Write raw bytes (ANSI art) followed by a line break.
    fn write_raw_line(&mut self, bytes: &[u8]);

    /// Show a prompt and get a line of input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    /// Block until a single key is pressed.
    fn read_key(&mut self) -> Result<char>;

    /// Wait for any key before continuing.
    fn pause(&mut self) -> Result<()> {
        self.message("[ Press any key ]");
        self.read_key().map(|_| ())
    }
}

/// A line-input prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in tests).
    pub key: String,
    /// The label to display.
    pub question: String,
}

impl Prompt {
    /// Create a prompt.
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }
}
