//! Visual theme and styling.

use console::Style;

/// The door's visual theme.
#[derive(Debug, Clone)]
pub struct DoorTheme {
    /// Style for success messages (green bold).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
}

impl Default for DoorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoorTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green().bold(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().cyan().bold(),
        }
    }

    /// Create a theme without colors (for --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(msg))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(msg))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }

    /// Format a header with its underline rule.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "-".repeat(title.chars().count().max(25));
        format!(
            "{}\r\n{}",
            self.header.apply_to(title),
            self.dim.apply_to(rule)
        )
    }
}

/// Check if colors should be enabled.
///
/// Door sessions are frequently socket-redirected rather than attached to a
/// TTY, and ANSI callers still expect colour, so only `NO_COLOR` turns it off.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    std::env::var("NO_COLOR").is_err()
}
