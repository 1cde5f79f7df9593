//! Application form.
//!
//! Every text field must be non-empty; blank answers repeat the prompt.
//! Port fields repeat until the answer parses as an integer. No range check
//! is applied to ports.

use crate::error::Result;
use crate::ui::{Prompt, UserInterface};

use super::{ApplicationRecord, ApplicationStore, WWIVNET_APPLICATIONS_FILE};

/// Title shown above the WWIVnet form.
pub const WWIVNET_FORM_TITLE: &str = "GHOSTnet WWIVnet Application Form";

/// Collect a complete application from the caller.
///
/// Fields are asked in a fixed order. The returned record is dated today and
/// awaiting review.
pub fn collect_application(ui: &mut dyn UserInterface) -> Result<ApplicationRecord> {
    let record = ApplicationRecord {
        alias: ask_text(ui, "alias", "Alias, Name, or Handle")?,
        email: ask_text(ui, "email", "Email Address")?,
        country: ask_text(ui, "country", "Country")?,
        city_state: ask_text(ui, "city_state", "City and State")?,
        area_code: ask_text(ui, "area_code", "Telephone Area Code")?,
        bbs_name: ask_text(ui, "bbs_name", "BBS Name")?,
        bbs_url: ask_text(ui, "bbs_url", "BBS URL")?,
        bbs_port: ask_integer(ui, "bbs_port", "BBS Port Number")?,
        bbs_software: ask_text(ui, "bbs_software", "BBS Software")?,
        bink_port: ask_integer(ui, "bink_port", "Bink Port")?,
        application_date: String::new(),
        approved: String::new(),
        date_approved: String::new(),
        last_edited: String::new(),
    };

    Ok(record.submitted_today())
}

/// Run the WWIVnet application form and save the result.
///
/// Save failures are reported to the caller and swallowed so the menu keeps
/// running. Input errors (the caller hanging up mid-form) propagate.
pub fn run_wwivnet_form(ui: &mut dyn UserInterface, store: &ApplicationStore) -> Result<()> {
    ui.show_header(WWIVNET_FORM_TITLE);

    let record = collect_application(ui)?;

    match store.append(WWIVNET_APPLICATIONS_FILE, record) {
        Ok(count) => {
            tracing::debug!("{} applications on file", count);
            ui.success("Application saved successfully");
        }
        Err(e) => {
            tracing::warn!("Saving application failed: {}", e);
            ui.error(&format!("Error saving application: {}", e));
        }
    }

    Ok(())
}

fn ask_text(ui: &mut dyn UserInterface, key: &str, label: &str) -> Result<String> {
    let prompt = Prompt::new(key, label);
    loop {
        let answer = ui.prompt(&prompt)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        ui.warning(&format!("{} is required.", label));
    }
}

fn ask_integer(ui: &mut dyn UserInterface, key: &str, label: &str) -> Result<i64> {
    let prompt = Prompt::new(key, label);
    loop {
        let answer = ui.prompt(&prompt)?;
        match answer.trim().parse() {
            Ok(n) => return Ok(n),
            Err(_) => ui.warning("Invalid input. Please enter a valid number."),
        }
    }
}
