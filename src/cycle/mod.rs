//! Typewriter text cycling.
//!
//! A [`Script`] is typed out one character at a time, held, deleted, and
//! followed by the next sentence, forever. [`step`] is the pure transition;
//! [`start`] runs it on a timer loop until the returned handle is stopped.

mod driver;
mod frames;
mod pacing;
mod script;
mod state;

pub use driver::{start, CycleOptions, CycleOutcome, Stopper, TypewriterHandle};
pub use frames::{Frame, Frames};
pub use pacing::{
    Delay, Pacing, DEFAULT_DELETE_MS, DEFAULT_GAP_MS, DEFAULT_HOLD_MS, DEFAULT_INITIAL_DELAY_MS,
    DEFAULT_TYPE_MS,
};
pub use script::Script;
pub use state::{step, CycleState};
