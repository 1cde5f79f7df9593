//! ANSI art screens.

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::Result;

use super::{trim_sauce, Escape, UserInterface};

/// Show an ANSI art file line by line.
///
/// SAUCE metadata is stripped first. Lines are split on CRLF, the line
/// ending art editors write, and bytes are passed through untouched so
/// CP437 block characters reach the caller's terminal intact. A non-zero
/// `delay` sleeps between lines for a modem-style reveal.
pub fn display_ansi_file(ui: &mut dyn UserInterface, path: &Path, delay: Duration) -> Result<()> {
    let content = fs::read(path)?;
    let art = trim_sauce(&content);

    tracing::debug!("Displaying {} ({} bytes)", path.display(), art.len());

    for line in split_crlf(art) {
        ui.write_raw_line(line);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    ui.write_raw_line(Escape::Reset.as_str().as_bytes());

    Ok(())
}

/// Split on `\r\n`, keeping a trailing empty segment like `str::split`.
fn split_crlf(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'\r' && bytes[i + 1] == b'\n' {
            lines.push(&bytes[start..i]);
            i += 2;
            start = i;
        } else {
            i += 1;
        }
    }
    lines.push(&bytes[start..]);
    lines
}
