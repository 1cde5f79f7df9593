//! Terminal UI for the caller's session.

use console::Term;
use std::io::{BufRead, Write};

use crate::error::Result;

use super::ansi::{move_cursor, Escape};
use super::prompts::strip_line_ending;
use super::{prompt_user, should_use_colors, DoorTheme, Prompt, UserInterface};

/// Terminal UI writing to stdout.
///
/// Lines end in CRLF since remote terminals don't translate bare LF. When
/// stdout isn't a TTY (hosts that redirect the socket to stdio), keys and
/// prompts fall back to reading whole lines from stdin.
pub struct TerminalUI {
    term: Term,
    theme: DoorTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            console::set_colors_enabled(true);
            DoorTheme::new()
        } else {
            console::set_colors_enabled(false);
            DoorTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }

    fn line(&mut self, text: &str) {
        write!(self.term, "{}\r\n", text).ok();
    }

    fn read_stdin_line(&mut self) -> Result<String> {
        self.term.flush().ok();
        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "caller input closed",
            )
            .into());
        }
        Ok(line)
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn inline(&mut self, text: &str) {
        write!(self.term, "{}", text).ok();
        self.term.flush().ok();
    }

    fn success(&mut self, msg: &str) {
        let styled = self.theme.format_success(msg);
        self.line(&styled);
    }

    fn warning(&mut self, msg: &str) {
        let styled = self.theme.format_warning(msg);
        self.line(&styled);
    }

    fn error(&mut self, msg: &str) {
        let styled = self.theme.format_error(msg);
        self.line(&styled);
    }

    fn show_header(&mut self, title: &str) {
        let styled = self.theme.format_header(title);
        self.line(&styled);
    }

    fn clear_screen(&mut self) {
        write!(self.term, "{}{}", Escape::EraseScreen, move_cursor(1, 1)).ok();
    }

    fn write_raw_line(&mut self, bytes: &[u8]) {
        self.term.write_all(bytes).ok();
        self.term.write_all(b"\r\n").ok();
        self.term.flush().ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        if self.term.is_term() {
            return prompt_user(prompt, &self.term);
        }

        write!(self.term, "{}: ", prompt.question).ok();
        let line = self.read_stdin_line()?;
        Ok(strip_line_ending(&line).to_string())
    }

    fn read_key(&mut self) -> Result<char> {
        if self.term.is_term() {
            return Ok(self.term.read_char()?);
        }

        let line = self.read_stdin_line()?;
        Ok(line.trim().chars().next().unwrap_or('\r'))
    }
}
