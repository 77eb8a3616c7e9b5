// Sentinel - util/constants.rs
//
// Every limit, delay, cap, and default lives here under its own name.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Sentinel";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Sentinel";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Audit pipeline limits
// =============================================================================

/// Fixed pause in milliseconds between finishing an assessment and publishing
/// the report.  The demo analysis completes in microseconds; the pause gives
/// the busy state a visible duration so the workflow reads as a real scan.
pub const ANALYSIS_DELAY_MS: u64 = 2_000;

/// Maximum size of an uploaded archive in bytes.  Larger files are rejected
/// before decoding to bound memory use (the whole archive is held in memory
/// while its directory is read).
pub const MAX_ARCHIVE_BYTES: u64 = 256 * 1024 * 1024; // 256 MiB

/// Maximum number of entries accepted from a single archive.  Archives
/// exceeding this are rejected rather than truncated, so a published report
/// always covers the whole archive.
pub const MAX_ARCHIVE_ENTRIES: usize = 50_000;

/// Exclusive upper bound for a per-file risk value.  Risk is drawn uniformly
/// from `[0, RISK_CEILING)`.
pub const RISK_CEILING: f64 = 100.0;

/// Exclusive upper bound for a radar axis magnitude.  Magnitudes are drawn
/// uniformly from `[0, RADAR_MAGNITUDE_CEILING)`, intentionally a different
/// scale from risk values.
pub const RADAR_MAGNITUDE_CEILING: f64 = 150.0;

// =============================================================================
// Risk banding
// =============================================================================

/// Risk values strictly below this render in the low (green) band.
pub const RISK_LOW_MAX: f64 = 30.0;

/// Risk values strictly below this (and at or above `RISK_LOW_MAX`) render in
/// the medium (amber) band; values at or above render in the high (red) band.
pub const RISK_HIGH_MIN: f64 = 70.0;

// =============================================================================
// Activity feed limits
// =============================================================================

/// Default cap on retained activity entries.  The feed is most-recent-first;
/// entries beyond the cap are evicted from the tail.
pub const DEFAULT_MAX_ACTIVITY_ENTRIES: usize = 500;

/// Minimum user-configurable activity cap (controls must be non-trivial).
pub const MIN_MAX_ACTIVITY_ENTRIES: usize = 50;

/// Hard upper bound on the activity cap (prevents configuration mistakes).
pub const ABSOLUTE_MAX_ACTIVITY_ENTRIES: usize = 10_000;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Presentation figures
// =============================================================================

/// Overview stat cards: (title, headline value, change-since-last-scan).
/// Marketing figures only; nothing computes them.
pub const OVERVIEW_STATS: &[(&str, &str, &str)] = &[
    ("Code Health", "87/100", "+5"),
    ("Vulnerabilities", "3", "-2"),
    ("Files Scanned", "1,247", "+124"),
    ("Bug Risk Score", "Low", "Stable"),
];

/// Landing page status ticker lines.  Static copy; nothing updates them.
pub const TICKER_MESSAGES: &[&str] = &[
    "Sentinel_Engine: Operational",
    "Vulnerability_Scan: Listening",
    "Cloud_Node: Asia-South-1",
    "Last_Scan: 4s ago",
    "Security_Patch: v2.4.1",
    "Threat_Level: Minimal",
    "Database: Indexed",
    "Uptime: 99.99%",
];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Preference persistence file name (stored in the platform data directory).
pub const PREFS_FILE_NAME: &str = "prefs.json";
