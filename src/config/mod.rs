//! Door configuration.
//!
//! Settings come from an INI file (`config.ini` by default):
//!
//! ```ini
//! [Settings]
//! AdminSecurityLevel = 255
//! WWIVnet = true
//! FTN = false
//! ```
//!
//! - Schema and defaults in [`schema`]
//! - File loading and value parsing in [`loader`]
//!
//! # Example
//!
//! ```
//! use ghostnet_door::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config("[Settings]\nAdminSecurityLevel = 200\n", Path::new("config.ini")).unwrap();
//! assert_eq!(config.admin_security_level, 200);
//! assert!(!config.wwivnet);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_bool, parse_config, DEFAULT_CONFIG_FILE};
pub use schema::DoorConfig;
