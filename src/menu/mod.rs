//! The door's main menu.
//!
//! The menu is a small state machine: it draws, waits for one key, runs the
//! chosen action and draws again. `Quit` is the only way out, apart from the
//! caller hanging up.
//!
//! - [`screens`] - The screens behind each menu entry

pub mod screens;

use crate::application::{run_wwivnet_form, ApplicationStore};
use crate::config::DoorConfig;
use crate::dropfile::SessionInfo;
use crate::error::Result;
use crate::ui::UserInterface;

/// An action selectable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// `1`: dump the drop file fields.
    ShowSessionInfo,
    /// `2`: show settings and the caller's admin status. Admins only.
    ShowConfigAndAccess,
    /// `3`: fill out the WWIVnet node application.
    RunApplicationForm,
    /// `Q`: leave the door.
    Quit,
}

impl MenuAction {
    /// Map a key press to an action.
    ///
    /// Returns `None` for unknown keys, and for `2` when the caller isn't an
    /// admin since that entry isn't on their menu.
    pub fn from_key(key: char, is_admin: bool) -> Option<Self> {
        match key.to_ascii_uppercase() {
            '1' => Some(Self::ShowSessionInfo),
            '2' if is_admin => Some(Self::ShowConfigAndAccess),
            '3' => Some(Self::RunApplicationForm),
            'Q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// The main menu for one caller session.
pub struct MainMenu {
    config: DoorConfig,
    session: Result<SessionInfo>,
    store: ApplicationStore,
}

impl MainMenu {
    /// Create the menu.
    ///
    /// `session` is the outcome of reading the drop file. A failed read
    /// doesn't stop the door; the error is shown on the menu and the
    /// session-dependent entries degrade.
    pub fn new(config: DoorConfig, session: Result<SessionInfo>, store: ApplicationStore) -> Self {
        Self {
            config,
            session,
            store,
        }
    }

    /// Whether the caller gets the admin entries.
    pub fn is_admin(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.has_admin_access(&self.config))
            .unwrap_or(false)
    }

    /// Run the menu until the caller quits or hangs up.
    ///
    /// A hang-up (input closed) ends the session normally. Other input
    /// errors are returned.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        match self.run_loop(ui) {
            Err(e) if e.is_hangup() => {
                tracing::info!("Caller input closed, leaving menu");
                Ok(())
            }
            other => other,
        }
    }

    fn run_loop(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let mut redraw = true;
        loop {
            if redraw {
                self.render(ui);
            }

            let key = ui.read_key()?;
            tracing::debug!("Menu key {:?}", key);

            let Some(action) = MenuAction::from_key(key, self.is_admin()) else {
                ui.warning(&self.invalid_option_message());
                redraw = false;
                continue;
            };

            if action == MenuAction::Quit {
                ui.message("");
                ui.message("Exiting program.");
                return Ok(());
            }

            self.perform(action, ui)?;
            redraw = true;
        }
    }

    fn render(&self, ui: &mut dyn UserInterface) {
        ui.clear_screen();
        ui.show_header("Main Menu");
        if let Err(e) = &self.session {
            screens::show_session_error(ui, e);
        }
        ui.message("1. [DEBUG] View Drop File Data");
        if self.is_admin() {
            ui.message("2. [DEBUG] Config & User Access Check");
        }
        ui.message("3. Apply for GHOSTnet WWIVnet Node");
        ui.message("Q. Quit");
        ui.message("");
        ui.inline("Select an option: ");
    }

    fn perform(&self, action: MenuAction, ui: &mut dyn UserInterface) -> Result<()> {
        ui.clear_screen();
        match (action, &self.session) {
            (MenuAction::ShowSessionInfo, Ok(session)) => {
                screens::show_session_info(ui, session);
            }
            (MenuAction::ShowSessionInfo, Err(e)) => {
                screens::show_session_error(ui, e);
            }
            (MenuAction::ShowConfigAndAccess, Ok(session)) => {
                screens::show_config(ui, &self.config, session);
            }
            (MenuAction::ShowConfigAndAccess, Err(e)) => {
                // Unreachable through from_key, which requires an admin session.
                screens::show_session_error(ui, e);
            }
            (MenuAction::RunApplicationForm, _) => {
                run_wwivnet_form(ui, &self.store)?;
            }
            (MenuAction::Quit, _) => return Ok(()),
        }
        ui.pause()
    }

    fn invalid_option_message(&self) -> String {
        if self.is_admin() {
            "Invalid option. Please select 1, 2, 3, or Q.".to_string()
        } else {
            "Invalid option. Please select 1, 3, or Q.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::WWIVNET_APPLICATIONS_FILE;
    use crate::error::DoorError;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn session(level: i64) -> SessionInfo {
        SessionInfo {
            bbs_id: "CoolBBS".to_string(),
            alias: "jdoe".to_string(),
            security_level: level,
            ..SessionInfo::default()
        }
    }

    fn menu(level: i64, temp: &TempDir) -> MainMenu {
        MainMenu::new(
            DoorConfig::default(),
            Ok(session(level)),
            ApplicationStore::new(temp.path().join("data")),
        )
    }

    fn fill_form(ui: &mut MockUI) {
        for (key, value) in [
            ("alias", "Sysop Sam"),
            ("email", "sam@example.com"),
            ("country", "USA"),
            ("city_state", "Austin, TX"),
            ("area_code", "512"),
            ("bbs_name", "Ghost Town"),
            ("bbs_url", "ghost.example.com"),
            ("bbs_port", "2323"),
            ("bbs_software", "WWIV 5.9"),
            ("bink_port", "24554"),
        ] {
            ui.set_prompt_response(key, value);
        }
    }

    #[test]
    fn from_key_maps_menu_entries() {
        assert_eq!(MenuAction::from_key('1', false), Some(MenuAction::ShowSessionInfo));
        assert_eq!(MenuAction::from_key('3', false), Some(MenuAction::RunApplicationForm));
        assert_eq!(MenuAction::from_key('q', false), Some(MenuAction::Quit));
        assert_eq!(MenuAction::from_key('Q', false), Some(MenuAction::Quit));
        assert_eq!(MenuAction::from_key('x', true), None);
    }

    #[test]
    fn from_key_gates_admin_entry() {
        assert_eq!(MenuAction::from_key('2', false), None);
        assert_eq!(
            MenuAction::from_key('2', true),
            Some(MenuAction::ShowConfigAndAccess)
        );
    }

    #[test]
    fn quit_ends_menu() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.queue_keys("q");

        menu(10, &temp).run(&mut ui).unwrap();

        assert!(ui.has_message("Exiting program."));
        assert_eq!(ui.clears(), 1);
    }

    #[test]
    fn selection_prompt_stays_on_its_line() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.queue_keys("q");

        menu(10, &temp).run(&mut ui).unwrap();

        assert_eq!(ui.inline_text(), "Select an option: ");
        assert!(!ui.has_message("Select an option"));
    }

    #[test]
    fn admin_entry_shown_only_to_admins() {
        let temp = TempDir::new().unwrap();

        let mut ui = MockUI::new();
        ui.queue_keys("q");
        menu(255, &temp).run(&mut ui).unwrap();
        assert!(ui.has_message("2. [DEBUG] Config & User Access Check"));

        let mut ui = MockUI::new();
        ui.queue_keys("q");
        menu(254, &temp).run(&mut ui).unwrap();
        assert!(!ui.has_message("2. [DEBUG]"));
    }

    #[test]
    fn session_info_then_pause_then_menu_again() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.queue_keys("1 q");

        menu(10, &temp).run(&mut ui).unwrap();

        assert!(ui.has_message("BBSID: CoolBBS"));
        assert!(ui.has_message("Press any key"));
        // menu, info screen, menu again
        assert_eq!(ui.clears(), 3);
    }

    #[test]
    fn non_admin_pressing_two_is_invalid() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.queue_keys("2q");

        menu(10, &temp).run(&mut ui).unwrap();

        assert!(ui.has_warning("Please select 1, 3, or Q"));
        assert!(ui.headers().iter().all(|h| !h.contains("Configuration")));
    }

    #[test]
    fn admin_sees_config_screen() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.queue_keys("2 q");

        menu(255, &temp).run(&mut ui).unwrap();

        assert!(ui.has_header("Configuration Settings"));
        assert!(ui.has_success("jdoe has admin access"));
    }

    #[test]
    fn invalid_key_does_not_redraw() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.queue_keys("zq");

        menu(10, &temp).run(&mut ui).unwrap();

        assert!(ui.has_warning("Invalid option"));
        assert_eq!(ui.clears(), 1);
    }

    #[test]
    fn application_form_appends_record() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        fill_form(&mut ui);
        ui.queue_keys("3 3 q");

        let menu = menu(10, &temp);
        menu.run(&mut ui).unwrap();

        let records = ApplicationStore::new(temp.path().join("data"))
            .load(WWIVNET_APPLICATIONS_FILE)
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(ui.successes().len(), 2);
    }

    #[test]
    fn hangup_ends_menu_cleanly() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.queue_keys("1");

        menu(10, &temp).run(&mut ui).unwrap();

        assert!(!ui.has_message("Exiting program."));
    }

    #[test]
    fn unreadable_session_keeps_menu_running() {
        let temp = TempDir::new().unwrap();
        let menu = MainMenu::new(
            DoorConfig::default(),
            Err(DoorError::DropFileNotFound {
                dir: temp.path().to_path_buf(),
            }),
            ApplicationStore::new(temp.path().join("data")),
        );
        assert!(!menu.is_admin());

        let mut ui = MockUI::new();
        ui.queue_keys("1 q");
        menu.run(&mut ui).unwrap();

        assert!(ui.has_error("door32.sys file not found"));
        assert!(!ui.has_message("BBSID"));
        assert!(ui.has_message("Exiting program."));
    }
}
