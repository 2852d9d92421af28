//! Configuration data model.
//!
//! Struct/enum definitions plus default values only. Loading and precedence
//! live in `config::mod`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults::{DEFAULT_BANNER_LINES, DEFAULT_CURSOR, DEFAULT_SENTENCES};
use crate::cycle::{
    CycleOptions, Pacing, DEFAULT_DELETE_MS, DEFAULT_GAP_MS, DEFAULT_HOLD_MS,
    DEFAULT_INITIAL_DELAY_MS, DEFAULT_TYPE_MS,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub script: ScriptConfig,
    pub pacing: PacingConfig,
    pub display: DisplayConfig,
}

/// Sentences to cycle through, under `[script]`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScriptConfig {
    pub sentences: Vec<String>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            sentences: DEFAULT_SENTENCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Step timings in milliseconds, under `[pacing]`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PacingConfig {
    pub type_ms: u64,
    pub delete_ms: u64,
    /// Pause once a sentence is fully typed.
    pub hold_ms: u64,
    /// Pause once a sentence is fully erased.
    pub gap_ms: u64,
    pub initial_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            type_ms: DEFAULT_TYPE_MS,
            delete_ms: DEFAULT_DELETE_MS,
            hold_ms: DEFAULT_HOLD_MS,
            gap_ms: DEFAULT_GAP_MS,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
        }
    }
}

impl PacingConfig {
    pub fn pacing(&self) -> Pacing {
        Pacing {
            type_delay: Duration::from_millis(self.type_ms),
            delete_delay: Duration::from_millis(self.delete_ms),
            hold_delay: Duration::from_millis(self.hold_ms),
            gap_delay: Duration::from_millis(self.gap_ms),
        }
    }

    /// Cycle options for an unbounded run.
    pub fn cycle_options(&self) -> CycleOptions {
        CycleOptions {
            pacing: self.pacing(),
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            max_steps: None,
        }
    }
}

/// Terminal rendering settings, under `[display]`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    /// Text drawn before the animated sentence.
    pub prefix: String,
    /// Glyph drawn after the animated sentence. Empty disables it.
    pub cursor: String,
    pub banner: bool,
    pub banner_lines: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            prefix: String::new(),
            cursor: DEFAULT_CURSOR.to_string(),
            banner: true,
            banner_lines: DEFAULT_BANNER_LINES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
