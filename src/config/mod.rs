//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins; CLI flags are
//! applied on top by the binary):
//! 1. Environment variables (`TYPEWRITER_INITIAL_DELAY_MS`, `NO_COLOR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./typewriter.toml in the current directory
//! 4. $XDG_CONFIG_HOME/typewriter/typewriter.toml (or the platform config dir)
//! 5. Built-in defaults

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

mod defaults;
mod types;

use defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, ENV_INITIAL_DELAY_MS, ENV_NO_COLOR};
pub use types::{Config, DisplayConfig, PacingConfig, ScriptConfig};

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Where the config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local,
    Global(PathBuf),
    BuiltInDefaults,
}

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    let (config, source) = load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )?;
    tracing::debug!(?source, "configuration loaded");
    Ok(config)
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<(Config, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&text)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    validate(&config)?;
    Ok((config, source))
}

fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(delay) = env_lookup(ENV_INITIAL_DELAY_MS) {
        let parsed = delay.trim().parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_INITIAL_DELAY_MS} value `{delay}`: expected integer milliseconds"
            ))
        })?;
        config.pacing.initial_delay_ms = parsed;
    }
    if env_lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
        config.display.color = false;
    }
    Ok(())
}

/// Reject pacing values that would make the loop spin.
///
/// An empty sentence list is left for `cycle::start` to reject.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let pacing = &config.pacing;
    for (key, value) in [
        ("type_ms", pacing.type_ms),
        ("delete_ms", pacing.delete_ms),
        ("hold_ms", pacing.hold_ms),
        ("gap_ms", pacing.gap_ms),
    ] {
        if value == 0 {
            return Err(ConfigError::Invalid(format!(
                "pacing.{key} must be greater than zero"
            )));
        }
    }
    Ok(())
}

/// Serialize the resolved config back to TOML for `--print-config`.
pub fn render_config_toml(config: &Config) -> Result<String, ConfigError> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::Invalid(format!("failed to render config: {e}")))
}

/// Root directory for user-level config files.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::config_dir()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;
    use std::collections::HashMap;
    use std::io;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn not_found(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    #[test]
    fn defaults_are_sensible() {
        let c = Config::default();
        assert_eq!(c.script.sentences.len(), 3);
        assert_eq!(
            c.script.sentences[0],
            "Creating modern, user-friendly web experiences."
        );
        assert_eq!(c.pacing.type_ms, 100);
        assert_eq!(c.pacing.delete_ms, 50);
        assert_eq!(c.pacing.hold_ms, 2000);
        assert_eq!(c.pacing.gap_ms, 500);
        assert_eq!(c.pacing.initial_delay_ms, 1000);
        assert!(c.display.color);
        assert!(c.display.banner);
        assert_eq!(c.display.cursor, "|");
        assert_eq!(c.display.banner_lines.len(), 3);
    }

    #[test]
    fn missing_files_fall_back_to_builtin_defaults() {
        let (config, source) =
            load_config_from_sources(None, not_found, no_env, || None).expect("load");
        assert_eq!(config, Config::default());
        assert_eq!(source, ConfigSource::BuiltInDefaults);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let toml = r#"
            [script]
            sentences = ["one", "two"]

            [pacing]
            hold_ms = 750
        "#;
        let (config, source) = load_config_from_sources(
            None,
            |path| {
                if path == Path::new("typewriter.toml") {
                    Ok(toml.to_string())
                } else {
                    not_found(path)
                }
            },
            no_env,
            || None,
        )
        .expect("load");
        assert_eq!(source, ConfigSource::Local);
        assert_eq!(config.script.sentences, vec!["one", "two"]);
        assert_eq!(config.pacing.hold_ms, 750);
        assert_eq!(config.pacing.type_ms, 100);
        assert!(config.display.color);
    }

    #[test]
    fn global_file_is_read_from_config_root() {
        let root = PathBuf::from("/cfg");
        let (config, source) = load_config_from_sources(
            None,
            |path| {
                if path == Path::new("/cfg/typewriter/typewriter.toml") {
                    Ok("[display]\nprefix = \"> \"\n".to_string())
                } else {
                    not_found(path)
                }
            },
            no_env,
            || Some(root.clone()),
        )
        .expect("load");
        assert_eq!(
            source,
            ConfigSource::Global(PathBuf::from("/cfg/typewriter/typewriter.toml"))
        );
        assert_eq!(config.display.prefix, "> ");
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from_sources(Some("nope.toml"), not_found, no_env, || None)
            .expect_err("missing explicit file");
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = load_config_from_sources(
            None,
            |_| Ok("[pacing\ntype_ms = ".to_string()),
            no_env,
            || None,
        )
        .expect_err("bad toml");
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn env_overrides_take_precedence() {
        let env: HashMap<&str, &str> =
            HashMap::from([("TYPEWRITER_INITIAL_DELAY_MS", "0"), ("NO_COLOR", "1")]);
        let (config, _) = load_config_from_sources(
            None,
            |_| Ok("[pacing]\ninitial_delay_ms = 3000\n".to_string()),
            |name| env.get(name).map(|v| v.to_string()),
            || None,
        )
        .expect("load");
        assert_eq!(config.pacing.initial_delay_ms, 0);
        assert!(!config.display.color);
    }

    #[test]
    fn empty_no_color_is_ignored() {
        let (config, _) = load_config_from_sources(
            None,
            not_found,
            |name| (name == "NO_COLOR").then(String::new),
            || None,
        )
        .expect("load");
        assert!(config.display.color);
    }

    #[test]
    fn non_numeric_delay_env_is_invalid() {
        let err = load_config_from_sources(
            None,
            not_found,
            |name| (name == "TYPEWRITER_INITIAL_DELAY_MS").then(|| "soon".to_string()),
            || None,
        )
        .expect_err("bad env");
        assert!(err.to_string().contains("TYPEWRITER_INITIAL_DELAY_MS"));
    }

    #[test]
    fn zero_step_pacing_is_rejected() {
        let err = load_config_from_sources(
            None,
            |_| Ok("[pacing]\ndelete_ms = 0\n".to_string()),
            no_env,
            || None,
        )
        .expect_err("zero pacing");
        assert!(err.to_string().contains("pacing.delete_ms"));
    }

    #[test]
    fn empty_sentence_list_loads_and_is_left_to_start() {
        let (config, _) = load_config_from_sources(
            None,
            |_| Ok("[script]\nsentences = []\n".to_string()),
            no_env,
            || None,
        )
        .expect("load");
        assert!(config.script.sentences.is_empty());
    }

    #[test]
    fn rendered_config_parses_back() {
        let mut config = Config::default();
        config.display.prefix = "$ ".to_string();
        let text = render_config_toml(&config).expect("render");
        let parsed: Config = toml::from_str(&text).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn load_config_reads_explicit_file_from_disk() {
        let dir = TestTempDir::new("config");
        let path = dir.write_text("custom.toml", "[script]\nsentences = [\"disk\"]\n");
        assert!(path.starts_with(dir.path()));
        let config = load_config(Some(path.to_string_lossy().as_ref())).expect("load");
        assert_eq!(config.script.sentences, vec!["disk"]);
    }
}
