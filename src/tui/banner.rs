//! One-shot console banner printed before the animation starts.

use crate::tui::settings;
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Render banner lines, cycling through the banner palette when colored.
/// The first line is bold.
pub fn render_banner(lines: &[String], color: bool) -> String {
    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        if color {
            let tint = settings::BANNER_PALETTE[idx % settings::BANNER_PALETTE.len()];
            let styled = line.as_str().with(tint);
            if idx == 0 {
                out.push_str(&styled.bold().to_string());
            } else {
                out.push_str(&styled.to_string());
            }
        } else {
            out.push_str(line);
        }
        out.push_str(settings::NEWLINE);
    }
    out
}

/// Write the banner to `out`. An empty line list writes nothing.
pub fn print_banner<W: Write>(out: &mut W, lines: &[String], color: bool) -> io::Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    out.write_all(render_banner(lines, color).as_bytes())?;
    out.flush()
}
