//! Centralized, hardcoded terminal settings.
//!
//! This is the single place to tweak escape sequences and colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Line control
// ---------------------------------------------------------------------------

pub const CLEAR_LINE: &str = "\r\x1b[2K";
pub const NEWLINE: &str = "\n";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_PREFIX: Color = Color::Grey;
pub const COLOR_TEXT: Color = Color::White;
pub const COLOR_CURSOR: Color = Color::Rgb {
    r: 0x22,
    g: 0xd3,
    b: 0xee,
};

/// Banner palette, applied line by line and repeated.
pub const BANNER_PALETTE: [Color; 3] = [
    Color::Rgb {
        r: 0xa8,
        g: 0x55,
        b: 0xf7,
    },
    Color::Rgb {
        r: 0x22,
        g: 0xd3,
        b: 0xee,
    },
    Color::White,
];
