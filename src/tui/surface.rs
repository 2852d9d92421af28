//! Terminal-backed text surface.

use crate::surface::TextSurface;
use crate::tui::settings;
use crossterm::style::Stylize;
use std::io::{self, IsTerminal, Write};

/// Writes each frame to a terminal line, redrawing in place on a TTY.
///
/// Off a TTY, every frame goes on its own line so piped output stays
/// readable.
pub struct TerminalSurface<W: Write + Send = io::Stdout> {
    out: W,
    color: bool,
    in_place: bool,
    prefix: String,
    cursor: String,
}

impl TerminalSurface<io::Stdout> {
    /// Surface on stdout, redrawing in place only when stdout is a TTY.
    pub fn stdout(color: bool, prefix: impl Into<String>, cursor: impl Into<String>) -> Self {
        let out = io::stdout();
        let in_place = out.is_terminal();
        Self::new(out, color && in_place, in_place, prefix, cursor)
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(
        out: W,
        color: bool,
        in_place: bool,
        prefix: impl Into<String>,
        cursor: impl Into<String>,
    ) -> Self {
        Self {
            out,
            color,
            in_place,
            prefix: prefix.into(),
            cursor: cursor.into(),
        }
    }

    /// Erase the animated line, leaving the cursor at column zero.
    pub fn clear(&mut self) {
        if !self.in_place {
            return;
        }
        if let Err(err) = write!(self.out, "{}", settings::CLEAR_LINE).and_then(|()| self.out.flush())
        {
            tracing::warn!(error = %err, "failed to clear typewriter line");
        }
    }

    /// Move past the animated line so it stays visible after the run.
    pub fn end_line(&mut self) {
        if !self.in_place {
            return;
        }
        if let Err(err) = write!(self.out, "{}", settings::NEWLINE).and_then(|()| self.out.flush())
        {
            tracing::warn!(error = %err, "failed to end typewriter line");
        }
    }

    /// Consume the surface and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_line(&self, text: &str) -> String {
        let lead = if self.in_place { settings::CLEAR_LINE } else { "" };
        let tail = if self.in_place { "" } else { settings::NEWLINE };
        if self.color {
            format!(
                "{lead}{}{}{}{tail}",
                self.prefix.as_str().with(settings::COLOR_PREFIX),
                text.with(settings::COLOR_TEXT),
                self.cursor.as_str().with(settings::COLOR_CURSOR),
            )
        } else {
            format!("{lead}{}{text}{}{tail}", self.prefix, self.cursor)
        }
    }
}

impl<W: Write + Send> TextSurface for TerminalSurface<W> {
    fn set_text(&mut self, text: &str) {
        let line = self.render_line(text);
        if let Err(err) = self
            .out
            .write_all(line.as_bytes())
            .and_then(|()| self.out.flush())
        {
            tracing::warn!(error = %err, "failed to render typewriter frame");
        }
    }
}
