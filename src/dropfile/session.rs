//! Caller session parsed from `door32.sys`.

use std::fs;
use std::path::Path;

use crate::config::DoorConfig;
use crate::error::{DoorError, Result};

use super::{find_drop_file, REQUIRED_LINES};

/// The caller's session as described by the host.
///
/// Fields follow the `door32.sys` line order. Numeric fields that are
/// missing or malformed read as zero rather than failing the parse; hosts
/// commonly leave fields they don't track blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInfo {
    /// Line 1: comm type (0 = local, 1 = serial, 2 = telnet).
    pub comm_type: i64,
    /// Line 2: comm or socket handle.
    pub comm_handle: i64,
    /// Line 3: baud rate.
    pub baud_rate: i64,
    /// Line 4: BBS software name and version.
    pub bbs_id: String,
    /// Line 5: user record position.
    pub user_record: i64,
    /// Line 6: caller's real name.
    pub real_name: String,
    /// Line 7: caller's alias or handle.
    pub alias: String,
    /// Line 8: security level.
    pub security_level: i64,
    /// Line 9: time left in minutes.
    pub time_left: i64,
    /// Line 10: emulation (0 = ASCII, 1 = ANSI, ...).
    pub emulation: i64,
    /// Line 11: node number.
    pub node: i64,
}

impl SessionInfo {
    /// Map drop file lines to session fields by position.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` if fewer than eleven lines are given.
    /// Lines past the eleventh are ignored.
    pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        if lines.len() < REQUIRED_LINES {
            return Err(DoorError::InsufficientData {
                found: lines.len(),
                required: REQUIRED_LINES,
            });
        }

        let text = |i: usize| lines[i].as_ref().to_string();
        let number = |i: usize, field: &str| parse_number(lines[i].as_ref(), field);

        Ok(Self {
            comm_type: number(0, "comm_type"),
            comm_handle: number(1, "comm_handle"),
            baud_rate: number(2, "baud_rate"),
            bbs_id: text(3),
            user_record: number(4, "user_record"),
            real_name: text(5),
            alias: text(6),
            security_level: number(7, "security_level"),
            time_left: number(8, "time_left"),
            emulation: number(9, "emulation"),
            node: number(10, "node"),
        })
    }

    /// Whether this caller meets the configured admin security level.
    pub fn has_admin_access(&self, config: &DoorConfig) -> bool {
        self.security_level >= config.admin_security_level
    }
}

/// Best-effort integer parse; anything unparsable reads as zero.
fn parse_number(raw: &str, field: &str) -> i64 {
    match raw.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            tracing::warn!("drop file field {} is not a number ({:?}), using 0", field, raw);
            0
        }
    }
}

/// Locate and parse the drop file in `dir`.
///
/// The file is decoded lossily so CP437 names from DOS-era hosts don't fail
/// the read. Both LF and CRLF line endings are accepted.
pub fn read_session(dir: &Path) -> Result<SessionInfo> {
    let path = find_drop_file(dir)?;
    let bytes = fs::read(&path)?;
    let content = String::from_utf8_lossy(&bytes);
    let lines: Vec<&str> = content.lines().collect();

    tracing::debug!("Read {} lines from {}", lines.len(), path.display());

    SessionInfo::parse_lines(&lines)
}
