//! CLI argument parsing via clap.

use clap::Parser;

/// Typewriter text effect for the terminal: types, holds, deletes, repeats.
#[derive(Debug, Parser)]
#[command(name = "typewriter", version)]
pub struct Args {
    /// Path to config file (default: ./typewriter.toml or ~/.config/typewriter/typewriter.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Sentence to cycle through. Repeat to build a script; replaces the configured one.
    #[arg(short = 's', long = "sentence", value_name = "TEXT")]
    pub sentences: Vec<String>,

    /// Override the wait before the first character.
    #[arg(long = "initial-delay-ms", value_name = "MS")]
    pub initial_delay_ms: Option<u64>,

    /// Stop after this many steps instead of running until Ctrl-C.
    #[arg(long = "steps", value_name = "N")]
    pub steps: Option<u64>,

    /// Print the frame schedule without sleeping (uses --steps, default 20).
    #[arg(long = "plan")]
    pub plan: bool,

    /// Print the resolved configuration as TOML and exit.
    #[arg(long = "print-config", conflicts_with = "plan")]
    pub print_config: bool,

    /// Skip the startup banner.
    #[arg(long = "no-banner")]
    pub no_banner: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
