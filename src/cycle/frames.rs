//! Infinite, sleep-free view of the step sequence.

use super::pacing::Delay;
use super::script::Script;
use super::state::{step, CycleState};
use crate::surface::MemorySurface;

/// One rendered step: what became visible, the resulting state, and the
/// wait that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub state: CycleState,
    pub delay: Delay,
}

/// Iterator that replays [`step`] forever without touching a clock.
///
/// ```
/// use typewriter::cycle::{Frames, Script};
///
/// let script = Script::new(["Hi"]).unwrap();
/// let texts: Vec<String> = Frames::new(&script).take(4).map(|f| f.text).collect();
/// assert_eq!(texts, ["H", "Hi", "H", ""]);
/// ```
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    script: &'a Script,
    state: CycleState,
}

impl<'a> Frames<'a> {
    pub fn new(script: &'a Script) -> Self {
        Self {
            script,
            state: CycleState::new(),
        }
    }

    /// State the next frame will be computed from.
    pub fn state(&self) -> CycleState {
        self.state
    }
}

impl Iterator for Frames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let mut surface = MemorySurface::default();
        let (state, delay) = step(self.state, self.script, &mut surface);
        self.state = state;
        Some(Frame {
            text: surface.text().to_string(),
            state,
            delay,
        })
    }
}
