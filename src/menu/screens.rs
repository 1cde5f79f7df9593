//! Menu screens.

use crate::config::DoorConfig;
use crate::dropfile::SessionInfo;
use crate::error::DoorError;
use crate::ui::UserInterface;

/// Print every drop file field.
pub fn show_session_info(ui: &mut dyn UserInterface, session: &SessionInfo) {
    ui.show_header("DOOR32.SYS Data:");
    ui.message(&format!(" - Comm Type: {}", session.comm_type));
    ui.message(&format!(" - Comm Handle: {}", session.comm_handle));
    ui.message(&format!(" - Baud Rate: {}", session.baud_rate));
    ui.message(&format!(" - BBSID: {}", session.bbs_id));
    ui.message(&format!(" - User Record Position: {}", session.user_record));
    ui.message(&format!(" - Real Name: {}", session.real_name));
    ui.message(&format!(" - Alias: {}", session.alias));
    ui.message(&format!(" - Security Level: {}", session.security_level));
    ui.message(&format!(" - Time Left: {} minutes", session.time_left));
    ui.message(&format!(" - Emulation: {}", session.emulation));
    ui.message(&format!(" - Node Number: {}", session.node));
    ui.message("");
}

/// Report a session that couldn't be read.
pub fn show_session_error(ui: &mut dyn UserInterface, err: &DoorError) {
    ui.error(&format!("Error reading drop file data: {}", err));
}

/// Print the settings and whether the caller has admin access.
pub fn show_config(ui: &mut dyn UserInterface, config: &DoorConfig, session: &SessionInfo) {
    ui.show_header("Configuration Settings:");
    ui.message(&format!(
        " - Admin Security Level: {}",
        config.admin_security_level
    ));
    ui.message(&format!(" - WWIVnet Enabled: {}", config.wwivnet));
    ui.message(&format!(" - FTN Enabled: {}", config.ftn));

    if session.has_admin_access(config) {
        ui.success(&format!(" - {} has admin access", session.alias));
    } else {
        ui.warning(&format!(" - {} does not have admin access", session.alias));
    }
    ui.message("");
}
