//! Render targets for the typewriter.
//!
//! The cycler only needs to replace the visible text, so a surface is any
//! sink that accepts "show exactly this string now". The terminal-backed
//! implementation lives in [`crate::tui::TerminalSurface`].

/// Sink that displays the currently visible portion of a sentence.
pub trait TextSurface: Send {
    /// Replace the visible text with `text`.
    fn set_text(&mut self, text: &str);
}

impl<T: TextSurface + ?Sized> TextSurface for Box<T> {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}

/// In-memory surface that keeps every frame it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    frames: Vec<String>,
}

impl MemorySurface {
    /// Text currently on display (empty before the first frame).
    pub fn text(&self) -> &str {
        self.frames.last().map(String::as_str).unwrap_or("")
    }

    /// Every frame in the order it was rendered.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl TextSurface for MemorySurface {
    fn set_text(&mut self, text: &str) {
        self.frames.push(text.to_string());
    }
}
