// Sentinel - core/assess.rs
//
// Mock risk assessment: turns an enumerated entry list into a report.
//
// Every number here is a uniform random draw. The per-file risks and the
// radar magnitudes use different scales and are numerically unrelated; the
// report exists to drive the presentation, nothing downstream interprets it.

use crate::core::model::{AuditReport, RadarAxis, RadarSample, ScanEntry};
use crate::util::constants;
use chrono::Utc;
use rand::Rng;

/// Produce a report for the given entry names.
///
/// One `ScanEntry` per name (in input order) with risk drawn uniformly from
/// `[0, RISK_CEILING)`, plus exactly one `RadarSample` per axis with
/// magnitude drawn uniformly from `[0, RADAR_MAGNITUDE_CEILING)`.  An empty
/// name list still yields the full radar set.
///
/// The generator is injected so callers control determinism; production code
/// passes `rand::rng()`.
pub fn build_report<R: Rng + ?Sized>(source: &str, names: Vec<String>, rng: &mut R) -> AuditReport {
    let entries: Vec<ScanEntry> = names
        .into_iter()
        .map(|name| ScanEntry {
            name,
            risk: rng.random_range(0.0..constants::RISK_CEILING),
        })
        .collect();

    let radar: Vec<RadarSample> = RadarAxis::all()
        .iter()
        .map(|&axis| RadarSample {
            axis,
            magnitude: rng.random_range(0.0..constants::RADAR_MAGNITUDE_CEILING),
        })
        .collect();

    tracing::debug!(
        source,
        entries = entries.len(),
        radar = radar.len(),
        "Assessment built"
    );

    AuditReport {
        source: source.to_string(),
        entries,
        radar,
        generated_at: Utc::now(),
    }
}

// =============================================================================
// Tests
// =============================================================================
