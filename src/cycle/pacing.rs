//! Delay kinds and their durations.

use std::time::Duration;

/// Default pause between typed characters.
pub const DEFAULT_TYPE_MS: u64 = 100;
/// Default pause between deleted characters.
pub const DEFAULT_DELETE_MS: u64 = 50;
/// Default pause once a sentence is fully typed.
pub const DEFAULT_HOLD_MS: u64 = 2000;
/// Default pause once a sentence is fully erased.
pub const DEFAULT_GAP_MS: u64 = 500;
/// Default wait before the very first step.
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 1000;

/// Which wait follows a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delay {
    /// Another character was typed.
    Type,
    /// Another character was deleted.
    Delete,
    /// The sentence is fully shown; deletion starts next.
    Hold,
    /// The sentence is fully erased; the next sentence starts next.
    Gap,
}

/// Maps each [`Delay`] kind to a wall-clock duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold_delay: Duration,
    pub gap_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(DEFAULT_TYPE_MS),
            delete_delay: Duration::from_millis(DEFAULT_DELETE_MS),
            hold_delay: Duration::from_millis(DEFAULT_HOLD_MS),
            gap_delay: Duration::from_millis(DEFAULT_GAP_MS),
        }
    }
}

impl Pacing {
    pub fn duration(&self, delay: Delay) -> Duration {
        match delay {
            Delay::Type => self.type_delay,
            Delay::Delete => self.delete_delay,
            Delay::Hold => self.hold_delay,
            Delay::Gap => self.gap_delay,
        }
    }
}
