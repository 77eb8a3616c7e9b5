// Sentinel - core/model.rs
//
// Data types shared across the layers: themes, report records, progress
// messages. Plain data, no I/O, no UI.

use chrono::{DateTime, Utc};

// =============================================================================
// Theme
// =============================================================================

/// The closed set of visual themes.
///
/// Identifiers persist as lowercase text (`midnight`, `matrix`, `solaris`,
/// `dracula`); an unrecognised identifier read back from storage falls back
/// to the default.  The enum is the entire theme surface: adding a variant
/// here is how a new theme ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Dark cyan-on-navy. The primary theme.
    #[default]
    Midnight,

    /// Green-on-black terminal.
    Matrix,

    /// Warm light theme.
    Solaris,

    /// Purple-accented dark theme.
    Dracula,
}

impl Theme {
    /// Returns all variants in picker order (default first).
    pub fn all() -> &'static [Theme] {
        &[Theme::Midnight, Theme::Matrix, Theme::Solaris, Theme::Dracula]
    }

    /// Stable lowercase identifier used in the preference file.
    pub fn id(&self) -> &'static str {
        match self {
            Theme::Midnight => "midnight",
            Theme::Matrix => "matrix",
            Theme::Solaris => "solaris",
            Theme::Dracula => "dracula",
        }
    }

    /// Parse a stored identifier.  `None` for anything unrecognised; the
    /// caller decides the fallback.
    pub fn from_id(id: &str) -> Option<Theme> {
        match id {
            "midnight" => Some(Theme::Midnight),
            "matrix" => Some(Theme::Matrix),
            "solaris" => Some(Theme::Solaris),
            "dracula" => Some(Theme::Dracula),
            _ => None,
        }
    }

    /// Human-readable name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Midnight => "Midnight Neon",
            Theme::Matrix => "Monochrome Matrix",
            Theme::Solaris => "Solaris Light",
            Theme::Dracula => "Dracula Pro",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Radar axes
// =============================================================================

/// The five fixed axes of the vulnerability radar.
///
/// Every report carries exactly one magnitude per axis, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadarAxis {
    Injection,
    Authentication,
    Cryptography,
    Configuration,
    Dependencies,
}

impl RadarAxis {
    /// Returns all axes in chart order.
    pub fn all() -> &'static [RadarAxis] {
        &[
            RadarAxis::Injection,
            RadarAxis::Authentication,
            RadarAxis::Cryptography,
            RadarAxis::Configuration,
            RadarAxis::Dependencies,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            RadarAxis::Injection => "Injection",
            RadarAxis::Authentication => "Authentication",
            RadarAxis::Cryptography => "Cryptography",
            RadarAxis::Configuration => "Configuration",
            RadarAxis::Dependencies => "Dependencies",
        }
    }
}

impl std::fmt::Display for RadarAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Audit report
// =============================================================================

/// Per-file assessment row.
///
/// `risk` is a mock value drawn uniformly from `[0, RISK_CEILING)`; it
/// carries no meaning beyond driving the presentation.
#[derive(Debug, Clone)]
pub struct ScanEntry {
    /// Final path segment of the archive entry (no directory components).
    pub name: String,

    /// Mock risk value in `[0, 100)`.
    pub risk: f64,
}

/// One radar chart data point.
#[derive(Debug, Clone)]
pub struct RadarSample {
    pub axis: RadarAxis,

    /// Mock magnitude in `[0, 150)`.  A different scale from `ScanEntry::risk`
    /// and numerically unrelated to it.
    pub magnitude: f64,
}

/// A completed audit: everything the analysis view renders.
///
/// Reports replace each other wholesale; entries and radar samples from
/// different runs are never mixed.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Display name of the source archive (file name, not full path).
    pub source: String,

    /// One row per non-directory archive entry, in archive order.
    pub entries: Vec<ScanEntry>,

    /// Exactly one sample per `RadarAxis`, in axis order.
    pub radar: Vec<RadarSample>,

    /// When the assessment was produced.
    pub generated_at: DateTime<Utc>,
}

impl AuditReport {
    /// Mean risk across all entries, or `None` for an empty archive.
    pub fn mean_risk(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: f64 = self.entries.iter().map(|e| e.risk).sum();
        Some(sum / self.entries.len() as f64)
    }

    /// Number of entries at or above the high-risk threshold.
    pub fn high_risk_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.risk >= crate::util::constants::RISK_HIGH_MIN)
            .count()
    }
}

// =============================================================================
// Audit progress (for UI updates)
// =============================================================================

/// Progress messages sent from the audit thread to the UI thread.
///
/// There is no streaming: a run produces `Started` then exactly one of
/// `Completed` or `Failed`.
#[derive(Debug, Clone)]
pub enum AuditProgress {
    /// The archive decoded successfully and assessment has begun.
    Started { source: String, total_files: usize },

    /// The run finished; the report is ready to publish.
    Completed { report: AuditReport },

    /// The run failed before producing a report.  Prior published results
    /// are unaffected.
    Failed { source: String, error: String },
}
