//! ANSI escape sequences and SAUCE handling.
//!
//! BBS callers connect with terminals like SyncTERM and NetRunner, so
//! output uses raw ECMA-48 sequences rather than terminfo lookups.

use std::fmt;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Cursor, erase, scroll and colour sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    EraseScreen,
    CursorHide,
    CursorShow,
    CursorBackward,
    CursorPrevLine,
    CursorLeft,
    CursorTop,
    CursorTopLeft,
    CursorBlinkEnable,
    CursorBlinkDisable,
    ScrollUp,
    ScrollDown,
    TextInsertChar,
    TextDeleteChar,
    TextEraseChar,
    TextInsertLine,
    TextDeleteLine,
    EraseRight,
    EraseLeft,
    EraseLine,
    EraseDown,
    EraseUp,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BlackHi,
    RedHi,
    GreenHi,
    YellowHi,
    BlueHi,
    MagentaHi,
    CyanHi,
    WhiteHi,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
    BgBlackHi,
    BgRedHi,
    BgGreenHi,
    BgYellowHi,
    BgBlueHi,
    BgMagentaHi,
    BgCyanHi,
    BgWhiteHi,
    Reset,
}

impl Escape {
    /// The literal escape sequence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EraseScreen => "\x1b[2J",
            Self::CursorHide => "\x1b[?25l",
            Self::CursorShow => "\x1b[?25h",
            Self::CursorBackward => "\x1b[D",
            Self::CursorPrevLine => "\x1b[F",
            Self::CursorLeft => "\x1b[G",
            Self::CursorTop => "\x1b[d",
            Self::CursorTopLeft => "\x1b[H",
            Self::CursorBlinkEnable => "\x1b[?12h",
            Self::CursorBlinkDisable => "\x1b[?12l",
            Self::ScrollUp => "\x1b[S",
            Self::ScrollDown => "\x1b[T",
            Self::TextInsertChar => "\x1b[@",
            Self::TextDeleteChar => "\x1b[P",
            Self::TextEraseChar => "\x1b[X",
            Self::TextInsertLine => "\x1b[L",
            Self::TextDeleteLine => "\x1b[M",
            Self::EraseRight => "\x1b[K",
            Self::EraseLeft => "\x1b[1K",
            Self::EraseLine => "\x1b[2K",
            Self::EraseDown => "\x1b[J",
            Self::EraseUp => "\x1b[1J",
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::BlackHi => "\x1b[30;1m",
            Self::RedHi => "\x1b[31;1m",
            Self::GreenHi => "\x1b[32;1m",
            Self::YellowHi => "\x1b[33;1m",
            Self::BlueHi => "\x1b[34;1m",
            Self::MagentaHi => "\x1b[35;1m",
            Self::CyanHi => "\x1b[36;1m",
            Self::WhiteHi => "\x1b[37;1m",
            Self::BgBlack => "\x1b[40m",
            Self::BgRed => "\x1b[41m",
            Self::BgGreen => "\x1b[42m",
            Self::BgYellow => "\x1b[43m",
            Self::BgBlue => "\x1b[44m",
            Self::BgMagenta => "\x1b[45m",
            Self::BgCyan => "\x1b[46m",
            Self::BgWhite => "\x1b[47m",
            Self::BgBlackHi => "\x1b[40;1m",
            Self::BgRedHi => "\x1b[41;1m",
            Self::BgGreenHi => "\x1b[42;1m",
            Self::BgYellowHi => "\x1b[43;1m",
            Self::BgBlueHi => "\x1b[44;1m",
            Self::BgMagentaHi => "\x1b[45;1m",
            Self::BgCyanHi => "\x1b[46;1m",
            Self::BgWhiteHi => "\x1b[47;1m",
            Self::Reset => "\x1b[0m",
        }
    }
}

impl fmt::Display for Escape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SyncTERM font selection (`CSI 0 ; n SP D`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Mosoul,
    Potnoodle,
    Microknight,
    MicroknightPlus,
    Topaz,
    TopazPlus,
    Ibm,
    IbmThin,
}

impl Font {
    /// The literal escape sequence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mosoul => "\x1b[0;38 D",
            Self::Potnoodle => "\x1b[0;37 D",
            Self::Microknight => "\x1b[0;41 D",
            Self::MicroknightPlus => "\x1b[0;39 D",
            Self::Topaz => "\x1b[0;42 D",
            Self::TopazPlus => "\x1b[0;40 D",
            Self::Ibm => "\x1b[0;0 D",
            Self::IbmThin => "\x1b[0;26 D",
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sequence moving the cursor to column `x`, row `y` (1-based).
pub fn move_cursor(x: u16, y: u16) -> String {
    format!("{}{};{}f", CSI, y, x)
}

/// `text` positioned at column `x`, row `y` (1-based).
pub fn print_at(text: &str, x: u16, y: u16) -> String {
    format!("{}{}", move_cursor(x, y), text)
}

/// Markers that start a SAUCE block, checked in this order.
const SAUCE_MARKERS: [&[u8]; 2] = [b"COMNT", b"SAUCE00"];

/// Strip SAUCE metadata from ANSI art.
///
/// Cuts at the first marker found and drops the character just before it,
/// which is the `^Z` end-of-file byte art editors write ahead of the block.
pub fn trim_sauce(content: &[u8]) -> &[u8] {
    for marker in SAUCE_MARKERS {
        if let Some(idx) = find(content, marker) {
            return trim_last_char(&content[..idx]);
        }
    }
    content
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Drop the last UTF-8 character, or the last byte if it isn't valid UTF-8.
fn trim_last_char(bytes: &[u8]) -> &[u8] {
    let len = bytes.len();
    for size in 1..=len.min(4) {
        if std::str::from_utf8(&bytes[len - size..]).is_ok() {
            return &bytes[..len - size];
        }
    }
    match len {
        0 => bytes,
        _ => &bytes[..len - 1],
    }
}
