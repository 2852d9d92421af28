//! Terminal front end: the in-place text surface and the startup banner.

pub mod banner;
pub mod settings;
mod surface;

pub use banner::{print_banner, render_banner};
pub use surface::TerminalSurface;
