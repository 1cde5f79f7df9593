//! GHOSTnet door - a BBS door for node applications.
//!
//! The door is launched by a BBS host with the path of the caller's session
//! directory. It reads the `door32.sys` drop file, shows a menu, and lets the
//! caller submit a WWIVnet node application that is appended to a JSON file.
//!
//! # Modules
//!
//! - [`application`] - Application records, the form collector and the JSON store
//! - [`cli`] - Command-line interface and the door session command
//! - [`config`] - `config.ini` loading
//! - [`dropfile`] - `door32.sys` lookup and parsing
//! - [`error`] - Error types and result aliases
//! - [`menu`] - The main menu loop and its screens
//! - [`ui`] - Terminal output, prompts, key input and ANSI escapes
//!
//! # Example
//!
//! ```
//! use ghostnet_door::config::DoorConfig;
//! use ghostnet_door::dropfile::SessionInfo;
//!
//! let lines = [
//!     "2", "5", "38400", "CoolBBS", "0", "Jane Doe", "jdoe", "255", "60", "1", "1",
//! ];
//! let session = SessionInfo::parse_lines(&lines).unwrap();
//! assert!(session.has_admin_access(&DoorConfig::default()));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod dropfile;
pub mod error;
pub mod menu;
pub mod ui;

pub use error::{DoorError, Result};
