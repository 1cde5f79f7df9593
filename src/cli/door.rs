//! The door session command.
//!
//! Loads config, optionally shows the welcome art, reads the caller's drop
//! file and hands over to the main menu.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::ApplicationStore;
use crate::config::load_config;
use crate::dropfile::read_session;
use crate::error::Result;
use crate::menu::MainMenu;
use crate::ui::{display_ansi_file, UserInterface};

use super::Cli;

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// One caller's visit to the door.
#[derive(Debug, Clone)]
pub struct DoorCommand {
    session_dir: PathBuf,
    config_path: PathBuf,
    data_dir: PathBuf,
    art: Option<PathBuf>,
    art_delay: Duration,
}

impl DoorCommand {
    /// Create a door command.
    pub fn new(session_dir: &Path, config_path: &Path, data_dir: &Path) -> Self {
        Self {
            session_dir: session_dir.to_path_buf(),
            config_path: config_path.to_path_buf(),
            data_dir: data_dir.to_path_buf(),
            art: None,
            art_delay: Duration::ZERO,
        }
    }

    /// Create a door command from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(&cli.path, &cli.config, &cli.data_dir)
            .with_art(cli.art.clone(), Duration::from_millis(cli.art_delay))
    }

    /// Show `art` before the menu, sleeping `delay` between lines.
    pub fn with_art(mut self, art: Option<PathBuf>, delay: Duration) -> Self {
        self.art = art;
        self.art_delay = delay;
        self
    }

    /// Get the session directory.
    pub fn session_dir(&self) -> &Path {
        &self.session_dir
    }

    /// Run the door.
    ///
    /// A config that can't be loaded fails the command. Everything after
    /// that is reported to the caller and the menu carries on.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("Config load failed: {}", e);
                ui.error(&format!("Error loading configuration: {}", e));
                return Ok(CommandResult::failure(1));
            }
        };

        if let Some(art) = &self.art {
            match display_ansi_file(ui, art, self.art_delay) {
                Ok(()) => match ui.pause() {
                    Err(e) if e.is_hangup() => return Ok(CommandResult::success()),
                    other => other?,
                },
                Err(e) => ui.error(&format!("Error displaying {}: {}", art.display(), e)),
            }
        }

        let session = read_session(&self.session_dir);
        match &session {
            Ok(s) => tracing::info!(
                "Session for {} on node {} (security level {})",
                s.alias,
                s.node,
                s.security_level
            ),
            Err(e) => tracing::warn!("Drop file unavailable: {}", e),
        }

        let menu = MainMenu::new(config, session, ApplicationStore::new(&self.data_dir));
        menu.run(ui)?;

        Ok(CommandResult::success())
    }
}
