//! Typewriter: a text-cycling effect that types sentences one character at
//! a time, pauses, deletes them, and moves on to the next, forever.
//!
//! The transition logic is pure ([`cycle::step`]); rendering goes through a
//! [`surface::TextSurface`] and waiting through a [`timer::Timer`], so the
//! effect runs the same against a terminal or an in-memory recorder.
//!
//! # Quick start
//!
//! ```no_run
//! use typewriter::cycle::{start, CycleOptions};
//! use typewriter::timer::TokioTimer;
//! use typewriter::tui::TerminalSurface;
//!
//! # async fn example() {
//! let surface = TerminalSurface::stdout(true, "", "|");
//! let handle = start(["Hello.", "Goodbye."], surface, TokioTimer, CycleOptions::default())
//!     .unwrap();
//! tokio::signal::ctrl_c().await.unwrap();
//! handle.stop_and_join().await.unwrap();
//! # }
//! ```

pub mod config;
pub mod cycle;
pub mod error;
pub mod logging;
pub mod surface;
#[cfg(test)]
pub mod testsupport;
pub mod timer;
pub mod tui;
