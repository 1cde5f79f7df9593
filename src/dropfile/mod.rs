//! `door32.sys` drop file lookup and parsing.
//!
//! A BBS host writes `door32.sys` into a per-node directory before launching
//! a door. The file is plain text with one field per line; the door only
//! relies on the first eleven.
//!
//! - [`locate`] - Case-insensitive lookup in the session directory
//! - [`session`] - The [`SessionInfo`] record and its positional parser

pub mod locate;
pub mod session;

pub use locate::find_drop_file;
pub use session::{read_session, SessionInfo};

/// File name of the drop file, matched ignoring case.
pub const DROP_FILE_NAME: &str = "door32.sys";

/// Number of lines a drop file must carry.
pub const REQUIRED_LINES: usize = 11;
