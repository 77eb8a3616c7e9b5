// Sentinel - platform/config.rs
//
// Platform directory resolution and config.toml loading.
//
// Directory locations come from the `directories` crate (XDG on Linux,
// AppData on Windows, Library on macOS). Config values are range-checked
// at load time; bad values degrade to defaults with a warning instead of
// refusing to start.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Where Sentinel keeps its configuration and data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Holds config.toml (e.g. ~/.config/sentinel/ or %APPDATA%\Sentinel\).
    pub config_dir: PathBuf,

    /// Holds the preference file.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve the per-platform directories, falling back to the current
    /// directory when the platform offers none (rare, but possible with an
    /// unset HOME).
    pub fn resolve() -> Self {
        match ProjectDirs::from("", "", constants::APP_ID) {
            Some(dirs) => {
                let paths = Self {
                    config_dir: dirs.config_dir().to_path_buf(),
                    data_dir: dirs.data_dir().to_path_buf(),
                };
                tracing::debug!(
                    config = %paths.config_dir.display(),
                    data = %paths.data_dir.display(),
                    "Resolved platform directories"
                );
                paths
            }
            None => {
                tracing::warn!("Platform directories unavailable, falling back to '.'");
                Self {
                    config_dir: PathBuf::from("."),
                    data_dir: PathBuf::from("."),
                }
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Deserialisation target for config.toml.
///
/// Every table and key is optional, and unknown keys are ignored, so a
/// config written for a newer build still loads.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub ui: UiSection,
    pub activity: ActivitySection,
    pub logging: LoggingSection,
}

/// `[ui]` table.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Body text size in points.
    pub font_size: Option<f32>,
}

/// `[activity]` table.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ActivitySection {
    /// Cap on retained activity feed entries.
    pub max_entries: Option<usize>,
}

/// `[logging]` table.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// One of "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Configuration after validation. Every field holds a usable value.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Body text size in points.
    pub font_size: f32,

    /// Cap on retained activity feed entries.
    pub max_activity_entries: usize,

    /// Requested log level, if the config named one. Read before tracing
    /// is initialised, hence a plain string.
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            font_size: constants::DEFAULT_FONT_SIZE,
            max_activity_entries: constants::DEFAULT_MAX_ACTIVITY_ENTRIES,
            log_level: None,
        }
    }
}

/// Load `config.toml` from `config_dir` and validate every field.
///
/// Always succeeds: a missing file means defaults with no warnings, and
/// an unreadable, unparseable, or out-of-range value means defaults for
/// the affected fields plus one human-readable warning each. The caller
/// logs the warnings once logging is up.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml, defaults apply");
        return (AppConfig::default(), warnings);
    }

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            warnings.push(format!(
                "Config file '{}' could not be read ({e}); continuing with defaults.",
                path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    let parsed: RawConfig = match toml::from_str(&text) {
        Ok(parsed) => parsed,
        Err(e) => {
            warnings.push(format!(
                "Config file '{}' is not valid TOML ({e}); continuing with defaults. \
                 config.example.toml shows the expected layout.",
                path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    tracing::debug!(path = %path.display(), "config.toml loaded");

    let mut config = AppConfig::default();

    if let Some(size) = parsed.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(format!(
                "[ui] font_size = {size} must be between {} and {}; using {}.",
                constants::MIN_FONT_SIZE,
                constants::MAX_FONT_SIZE,
                constants::DEFAULT_FONT_SIZE,
            ));
        }
    }

    if let Some(max) = parsed.activity.max_entries {
        if (constants::MIN_MAX_ACTIVITY_ENTRIES..=constants::ABSOLUTE_MAX_ACTIVITY_ENTRIES)
            .contains(&max)
        {
            config.max_activity_entries = max;
        } else {
            warnings.push(format!(
                "[activity] max_entries = {max} must be between {} and {}; using {}.",
                constants::MIN_MAX_ACTIVITY_ENTRIES,
                constants::ABSOLUTE_MAX_ACTIVITY_ENTRIES,
                constants::DEFAULT_MAX_ACTIVITY_ENTRIES,
            ));
        }
    }

    if let Some(ref level) = parsed.logging.level {
        let known = ["error", "warn", "info", "debug", "trace"];
        if known.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not one of error/warn/info/debug/trace; \
                 using the default ({}).",
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    (config, warnings)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_gives_defaults_without_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
        assert_eq!(
            config.max_activity_entries,
            constants::DEFAULT_MAX_ACTIVITY_ENTRIES
        );
        assert!(config.log_level.is_none());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_values_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            "[ui]\nfont_size = 16.0\n\n[activity]\nmax_entries = 100\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.max_activity_entries, 100);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_out_of_range_values_warn_and_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            "[ui]\nfont_size = 99.0\n\n[activity]\nmax_entries = 1\n",
        )
        .unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
        assert_eq!(
            config.max_activity_entries,
            constants::DEFAULT_MAX_ACTIVITY_ENTRIES
        );
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_unparseable_file_warns_and_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            "this is not toml [[[",
        )
        .unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not valid TOML"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            "[future_section]\nmystery = true\n\n[ui]\nfont_size = 12.0\n",
        )
        .unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.font_size, 12.0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_invalid_log_level_warns() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            "[logging]\nlevel = \"verbose\"\n",
        )
        .unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(config.log_level.is_none());
        assert_eq!(warnings.len(), 1);
    }
}
