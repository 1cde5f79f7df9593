//! Node applications.
//!
//! - [`record`] - The [`ApplicationRecord`] written to disk
//! - [`form`] - Collects a record from the caller through prompts
//! - [`store`] - Append-only JSON array file of submitted records

pub mod form;
pub mod record;
pub mod store;

pub use form::{collect_application, run_wwivnet_form};
pub use record::ApplicationRecord;
pub use store::{ApplicationStore, DEFAULT_DATA_DIR, WWIVNET_APPLICATIONS_FILE};
