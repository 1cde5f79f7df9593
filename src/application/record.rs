//! Application record.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One submitted node application.
///
/// Field order here is the key order in the JSON file. The last three
/// fields belong to the review process that runs outside the door; the
/// door only ever writes their initial values.
///
/// Keys missing from a stored record read as empty or zero, so records
/// edited by hand or written by older tools still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationRecord {
    /// Alias, name or handle.
    pub alias: String,
    pub email: String,
    pub country: String,
    pub city_state: String,
    /// Telephone area code.
    pub area_code: String,
    pub bbs_name: String,
    pub bbs_url: String,
    pub bbs_port: i64,
    pub bbs_software: String,
    /// BinkP mailer port.
    pub bink_port: i64,
    /// Submission date, `YYYY-MM-DD`.
    pub application_date: String,
    /// `"no"` until reviewed.
    pub approved: String,
    pub date_approved: String,
    pub last_edited: String,
}

impl ApplicationRecord {
    /// Value of `approved` for a record awaiting review.
    pub const NOT_APPROVED: &'static str = "no";

    /// Set the workflow fields for a new submission made on `date`.
    pub fn submitted_on(mut self, date: NaiveDate) -> Self {
        self.application_date = date.format("%Y-%m-%d").to_string();
        self.approved = Self::NOT_APPROVED.to_string();
        self.date_approved = String::new();
        self.last_edited = String::new();
        self
    }

    /// Set the workflow fields for a submission made today (local time).
    pub fn submitted_today(self) -> Self {
        self.submitted_on(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> ApplicationRecord {
        ApplicationRecord {
            alias: "sysop".to_string(),
            email: String::new(),
            country: String::new(),
            city_state: String::new(),
            area_code: String::new(),
            bbs_name: String::new(),
            bbs_url: String::new(),
            bbs_port: 0,
            bbs_software: String::new(),
            bink_port: 0,
            application_date: String::new(),
            approved: "yes".to_string(),
            date_approved: "2020-01-01".to_string(),
            last_edited: "2020-01-02".to_string(),
        }
    }

    #[test]
    fn submitted_on_sets_workflow_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let record = blank().submitted_on(date);
        assert_eq!(record.application_date, "2024-03-07");
        assert_eq!(record.approved, "no");
        assert_eq!(record.date_approved, "");
        assert_eq!(record.last_edited, "");
        assert_eq!(record.alias, "sysop");
    }

    #[test]
    fn serializes_keys_in_field_order() {
        let json = serde_json::to_string(&blank()).unwrap();
        let keys = [
            "alias",
            "email",
            "country",
            "city_state",
            "area_code",
            "bbs_name",
            "bbs_url",
            "bbs_port",
            "bbs_software",
            "bink_port",
            "application_date",
            "approved",
            "date_approved",
            "last_edited",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(&format!("\"{}\"", k)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ports_serialize_as_numbers() {
        let mut record = blank();
        record.bbs_port = 2323;
        record.bink_port = 24554;
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"bbs_port\":2323"));
        assert!(json.contains("\"bink_port\":24554"));
    }
}
