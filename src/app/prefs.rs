// Sentinel - app/prefs.rs
//
// Preference persistence: one versioned JSON file holding the active theme.
//
// Design principles:
// - Saves are atomic (write→temp, rename→final) so a crash during save
//   never corrupts the previous good file.
// - Load failures of any kind (missing file, malformed JSON, version
//   mismatch, unknown theme identifier) fall back to the default theme.
//   Appearance preferences are never worth an error dialog.
// - A failed save is logged and otherwise ignored: the in-memory value has
//   already changed and the UI follows it for the rest of the session.

use crate::core::model::Theme;
use crate::util::constants::PREFS_FILE_NAME;
use crate::util::error::PrefsError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment whenever `PrefsData` changes in a breaking way.  Version
/// mismatches silently discard the file.
pub const PREFS_VERSION: u32 = 1;

/// On-disk shape of the preference file.
#[derive(Debug, Serialize, Deserialize)]
struct PrefsData {
    /// Schema version; must equal `PREFS_VERSION` to be accepted.
    version: u32,

    /// Active theme identifier (see `Theme::id`).  Stored as text so a file
    /// edited by hand or written by a future version degrades to the default
    /// instead of rejecting the whole file.
    #[serde(default)]
    theme: String,
}

/// Resolve the preference file path from the platform data directory.
pub fn prefs_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PREFS_FILE_NAME)
}

// =============================================================================
// Theme store
// =============================================================================

/// Owns the active theme and its persisted slot.
///
/// Constructed once at startup and injected into the application state; all
/// theme reads and writes go through this value.  `set_active` updates the
/// in-memory value first and persists second, so the visual change the
/// caller applies afterwards never waits on (or fails with) the disk.
#[derive(Debug)]
pub struct ThemeStore {
    active: Theme,
    path: PathBuf,
}

impl ThemeStore {
    /// Initialise from the preference file under `data_dir`.
    ///
    /// Any load failure means the default theme; only genuinely unexpected
    /// failures are logged above debug level.
    pub fn load(data_dir: &Path) -> Self {
        let path = prefs_path(data_dir);
        let active = read_theme(&path).unwrap_or_default();
        tracing::debug!(theme = active.id(), "Theme store initialised");
        Self { active, path }
    }

    /// The current theme.
    pub fn active(&self) -> Theme {
        self.active
    }

    /// Switch the active theme and persist the choice.
    ///
    /// The in-memory update always takes effect; a persistence failure is
    /// logged and dropped.  Callers apply the visual side effect after this
    /// returns.
    pub fn set_active(&mut self, theme: Theme) {
        self.active = theme;
        if let Err(e) = self.persist() {
            tracing::warn!(theme = theme.id(), error = %e, "Theme preference not persisted");
        } else {
            tracing::debug!(theme = theme.id(), "Theme preference saved");
        }
    }

    /// Save the current theme atomically (write temp → rename).
    fn persist(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PrefsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = PrefsData {
            version: PREFS_VERSION,
            theme: self.active.id().to_string(),
        };
        let json = serde_json::to_string_pretty(&data).map_err(|source| PrefsError::Json {
            path: self.path.clone(),
            source,
        })?;

        // A crash between write and rename loses the new value but never
        // corrupts the previous one (rename is atomic on all supported
        // platforms).
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json.as_bytes()).map_err(|source| PrefsError::Io {
            path: tmp.clone(),
            source,
        })?;

        std::fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = std::fs::remove_file(&tmp);
            PrefsError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        Ok(())
    }
}

/// Read and validate the stored theme.  `None` means "use the default".
fn read_theme(path: &Path) -> Option<Theme> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            // Missing file is the normal first run; anything else is worth a trace.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read preference file");
            }
        })
        .ok()?;

    let data: PrefsData = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Preference file is malformed, using default theme"
            );
        })
        .ok()?;

    if data.version != PREFS_VERSION {
        tracing::warn!(
            found = data.version,
            expected = PREFS_VERSION,
            "Preference file version mismatch, using default theme"
        );
        return None;
    }

    let theme = Theme::from_id(&data.theme);
    if theme.is_none() {
        tracing::warn!(
            value = %data.theme,
            "Unknown theme identifier in preference file, using default theme"
        );
    }
    theme
}

// =============================================================================
// Unit tests
// =============================================================================
