//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{DoorError, Result};

use super::Prompt;

/// Convert dialoguer errors to DoorError.
fn map_dialoguer_err(e: dialoguer::Error) -> DoorError {
    DoorError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for a line of text on a real terminal.
///
/// Empty input is allowed through; the caller decides whether to accept it.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    let theme = prompt_theme();
    Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)
}

/// Strip the line ending from a line read outside a terminal.
pub(crate) fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}
