//! Append-only application storage.
//!
//! Each application file holds a single JSON array. Appending reads the
//! whole array, pushes the new record and rewrites the file. Nothing here
//! updates or removes records, and resubmissions are stored as-is.
//!
//! The file is not locked. Two doors appending to the same file at the same
//! moment can lose one of the records.

use std::fs;
use std::path::PathBuf;

use crate::error::{DoorError, Result};

use super::ApplicationRecord;

/// Directory applications are written to unless overridden.
pub const DEFAULT_DATA_DIR: &str = "data";

/// File holding WWIVnet node applications.
pub const WWIVNET_APPLICATIONS_FILE: &str = "GHOSTnet-WWIVnet-application.json";

/// Storage for submitted applications.
#[derive(Debug, Clone)]
pub struct ApplicationStore {
    dir: PathBuf,
}

impl ApplicationStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the path of an application file.
    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// Load all records from `filename`, oldest first.
    ///
    /// A missing or empty file, or one holding `null`, has no records.
    ///
    /// # Errors
    ///
    /// Returns `Decode` if the content is not a JSON array of records.
    pub fn load(&self, filename: &str) -> Result<Vec<ApplicationRecord>> {
        let path = self.file_path(filename);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Option<Vec<ApplicationRecord>> =
            serde_json::from_str(&content).map_err(|e| DoorError::Decode {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Ok(records.unwrap_or_default())
    }

    /// Append `record` to `filename` and return the new record count.
    ///
    /// The file is rewritten with two-space indentation through a sibling
    /// temp file and a rename, so readers never see a half-written array.
    /// If the existing content can't be decoded the file is left untouched.
    pub fn append(&self, filename: &str, record: ApplicationRecord) -> Result<usize> {
        fs::create_dir_all(&self.dir)?;

        let mut records = self.load(filename)?;
        records.push(record);

        let mut content = serde_json::to_string_pretty(&records).map_err(|e| {
            DoorError::Other(anyhow::anyhow!("could not encode data to JSON: {}", e))
        })?;
        content.push('\n');

        let path = self.file_path(filename);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &path)?;

        tracing::info!(
            "Appended application #{} to {}",
            records.len(),
            path.display()
        );

        Ok(records.len())
    }
}
