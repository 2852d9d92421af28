//! Cycle state and the single transition that mutates it.

use super::pacing::Delay;
use super::script::{char_len, char_prefix, Script};
use crate::surface::TextSurface;

/// Position of the animation within the script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CycleState {
    /// Active sentence; always `< script.len()`.
    pub sentence_index: usize,
    /// Chars of the active sentence currently shown.
    pub char_index: usize,
    pub is_deleting: bool,
}

impl CycleState {
    /// Starting state: first sentence, nothing shown, typing forward.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Advance the animation by one character and render the visible prefix.
///
/// Typing clamps at the sentence length and deleting clamps at zero, so an
/// empty sentence reads as fully typed immediately and then as fully erased
/// on the following step.
pub fn step<S>(state: CycleState, script: &Script, surface: &mut S) -> (CycleState, Delay)
where
    S: TextSurface + ?Sized,
{
    let current = script.sentence(state.sentence_index);
    let len = char_len(current);
    let mut next = state;

    let mut delay = if next.is_deleting {
        next.char_index = next.char_index.saturating_sub(1);
        Delay::Delete
    } else {
        next.char_index = (next.char_index + 1).min(len);
        Delay::Type
    };
    surface.set_text(char_prefix(current, next.char_index));

    if !next.is_deleting && next.char_index == len {
        next.is_deleting = true;
        delay = Delay::Hold;
        tracing::debug!(sentence = next.sentence_index, "sentence fully typed");
    } else if next.is_deleting && next.char_index == 0 {
        next.is_deleting = false;
        next.sentence_index = script.next_index(next.sentence_index);
        delay = Delay::Gap;
        tracing::debug!(next_sentence = next.sentence_index, "sentence erased");
    }

    tracing::trace!(
        sentence = next.sentence_index,
        chars = next.char_index,
        deleting = next.is_deleting,
        ?delay,
        "step"
    );
    (next, delay)
}
