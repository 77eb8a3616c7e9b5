// Sentinel - util/error.rs
//
// Error types for each subsystem, with causal chains kept intact so a
// failure can be logged with its full context. Errors never carry
// pre-rendered strings.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Umbrella error covering every Sentinel subsystem.
#[derive(Debug)]
pub enum SentinelError {
    /// Archive decoding or enumeration failed.
    Archive(ArchiveError),

    /// Preference persistence failed.
    Prefs(PrefsError),

    /// Configuration file could not be loaded.
    Config(ConfigError),

    /// I/O failure with the path and operation that hit it.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for SentinelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Archive(e) => write!(f, "Archive error: {e}"),
            Self::Prefs(e) => write!(f, "Preference error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(f, "Cannot {operation} '{}': {source}", path.display()),
        }
    }
}

impl std::error::Error for SentinelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Archive(e) => Some(e),
            Self::Prefs(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Archive errors
// ---------------------------------------------------------------------------

/// Failures while decoding an archive or walking its entries.
///
/// The core operates on in-memory bytes, so these variants carry no path;
/// the audit worker attaches the source archive name when reporting.
#[derive(Debug)]
pub enum ArchiveError {
    /// Archive exceeds the maximum allowed size.
    TooLarge { size: u64, max_size: u64 },

    /// The archive's central directory could not be decoded.
    Decode { source: zip::result::ZipError },

    /// A single entry's metadata could not be read.
    Entry {
        index: usize,
        source: zip::result::ZipError,
    },

    /// Archive contains more entries than the accepted maximum.
    TooManyEntries { count: usize, max: usize },
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { size, max_size } => write!(
                f,
                "Archive is {size} bytes, exceeds maximum of {max_size} bytes"
            ),
            Self::Decode { source } => {
                write!(f, "Not a readable zip archive: {source}")
            }
            Self::Entry { index, source } => {
                write!(f, "Cannot read archive entry {index}: {source}")
            }
            Self::TooManyEntries { count, max } => {
                write!(f, "Archive has {count} entries, maximum is {max}")
            }
        }
    }
}

impl std::error::Error for ArchiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source } => Some(source),
            Self::Entry { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ArchiveError> for SentinelError {
    fn from(e: ArchiveError) -> Self {
        Self::Archive(e)
    }
}

// ---------------------------------------------------------------------------
// Preference errors
// ---------------------------------------------------------------------------

/// Failures writing the preference file.  Load failures are not errors
/// here: a missing or malformed file means a fresh start, by design.
#[derive(Debug)]
pub enum PrefsError {
    /// JSON serialisation failed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// I/O error writing the preference file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { path, source } => {
                write!(
                    f,
                    "Cannot serialise preferences '{}': {source}",
                    path.display()
                )
            }
            Self::Io { path, source } => {
                write!(
                    f,
                    "Cannot write preferences '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PrefsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<PrefsError> for SentinelError {
    fn from(e: PrefsError) -> Self {
        Self::Prefs(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Failures loading the configuration file.
///
/// The loader itself degrades to defaults and reports warnings instead of
/// returning these; the type exists for callers that need config loading
/// to be fallible.
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The file is not valid TOML.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Cannot read config '{}': {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "Cannot parse config '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for SentinelError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience alias for results carrying [`SentinelError`].
pub type Result<T> = std::result::Result<T, SentinelError>;
