//! Default configuration constants.

/// Sentences shown when no script is configured.
pub(super) const DEFAULT_SENTENCES: [&str; 3] = [
    "Creating modern, user-friendly web experiences.",
    "Combining software engineering and network skills.",
    "Open to PFE internship opportunities.",
];
/// Banner printed once before the animation starts.
pub(super) const DEFAULT_BANNER_LINES: [&str; 3] = [
    "👋 Welcome to my portfolio!",
    "Developed by Chaimaa Amjad",
    "🌐 www.chaimaa.dev",
];
/// Glyph drawn after the visible text.
pub(super) const DEFAULT_CURSOR: &str = "|";
/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "typewriter.toml";
/// Directory under the config root that holds `typewriter.toml`.
pub(super) const CONFIG_DIR_NAME: &str = "typewriter";

pub(super) const ENV_INITIAL_DELAY_MS: &str = "TYPEWRITER_INITIAL_DELAY_MS";
pub(super) const ENV_NO_COLOR: &str = "NO_COLOR";
