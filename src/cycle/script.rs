//! The fixed, ordered sentence list the cycler walks through.

use crate::error::ConfigError;

/// Ordered, non-empty list of sentences. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    sentences: Vec<String>,
}

impl Script {
    /// Build a script, rejecting an empty sentence list.
    pub fn new<I, S>(sentences: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sentences: Vec<String> = sentences.into_iter().map(Into::into).collect();
        if sentences.is_empty() {
            return Err(ConfigError::EmptyScript);
        }
        Ok(Self { sentences })
    }

    /// Number of sentences; always at least one.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Sentence at `index`, wrapping cyclically.
    pub fn sentence(&self, index: usize) -> &str {
        &self.sentences[index % self.sentences.len()]
    }

    /// Index that follows `index` in cyclic order.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.sentences.len()
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }
}

/// Length of `text` in chars.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Prefix of `text` holding the first `chars` code points.
///
/// Counts past the end return the whole string.
pub(crate) fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
