// Sentinel - tests/e2e_audit.rs
//
// End-to-end tests for the audit pipeline.
//
// These tests exercise the real filesystem, real zip decoding, and the real
// background worker with its progress channel. No mocks, no stubs: a zip
// archive is written to a temp directory, submitted to the AuditManager, and
// progress is polled exactly the way the GUI shell polls it each frame.

use sentinel::app::audit::{AuditConfig, AuditManager};
use sentinel::app::prefs::ThemeStore;
use sentinel::app::state::{AppState, DashboardView};
use sentinel::core::activity::ActivityTag;
use sentinel::core::model::{AuditProgress, RadarAxis};
use sentinel::util::constants;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

// =============================================================================
// Helpers
// =============================================================================

/// Write a zip with two files and one directory into `dir`, returning its path.
fn write_sample_archive(dir: &Path) -> PathBuf {
    let path = dir.join("sample-project.zip");
    let file = fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);

    writer.start_file("a.txt", options).unwrap();
    writer.write_all(b"fn main() {}").unwrap();
    writer.add_directory("b/", options).unwrap();
    writer.start_file("b/c.txt", options).unwrap();
    writer.write_all(b"console.log(1)").unwrap();
    writer.finish().unwrap();
    path
}

/// Audit config with a short publish delay so tests do not sit through the
/// production-length pause.
fn fast_config() -> AuditConfig {
    AuditConfig {
        publish_delay: Duration::from_millis(10),
        ..Default::default()
    }
}

/// Poll the manager until a terminal message (Completed or Failed) arrives,
/// returning every message seen in order.
fn wait_for_terminal(manager: &mut AuditManager) -> Vec<AuditProgress> {
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut messages = Vec::new();
    while Instant::now() < deadline {
        messages.extend(manager.poll_progress());
        let done = messages
            .iter()
            .any(|m| matches!(m, AuditProgress::Completed { .. } | AuditProgress::Failed { .. }));
        if done {
            return messages;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!(
        "audit did not reach a terminal state within 10s; saw {} messages",
        messages.len()
    );
}

/// Fresh AppState backed by a throwaway prefs directory.
fn fresh_state(dir: &Path) -> AppState {
    let store = ThemeStore::load(dir);
    AppState::new(store, constants::DEFAULT_MAX_ACTIVITY_ENTRIES, false)
}

// =============================================================================
// Audit pipeline E2E
// =============================================================================

/// A well-formed archive produces Started followed by Completed, with
/// directory entries excluded and radar samples for every axis.
#[test]
fn e2e_audit_of_sample_archive_completes() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_sample_archive(dir.path());

    let mut manager = AuditManager::new();
    assert!(manager.submit(archive, fast_config()), "submit should start");

    let messages = wait_for_terminal(&mut manager);
    assert_eq!(messages.len(), 2, "expected Started + Completed: {messages:?}");

    match &messages[0] {
        AuditProgress::Started { source, total_files } => {
            assert_eq!(source, "sample-project.zip");
            assert_eq!(*total_files, 2, "directory entries must not be counted");
        }
        other => panic!("expected Started first, got {other:?}"),
    }

    let report = match &messages[1] {
        AuditProgress::Completed { report } => report,
        other => panic!("expected Completed second, got {other:?}"),
    };

    assert_eq!(report.source, "sample-project.zip");
    let names: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["a.txt", "c.txt"],
        "entries should be final path segments of files only"
    );
    for entry in &report.entries {
        assert!(
            entry.risk >= 0.0 && entry.risk < constants::RISK_CEILING,
            "risk out of range: {}",
            entry.risk
        );
    }

    assert_eq!(report.radar.len(), RadarAxis::all().len());
    for (sample, &axis) in report.radar.iter().zip(RadarAxis::all()) {
        assert_eq!(sample.axis, axis, "radar samples follow the axis order");
        assert!(
            sample.magnitude >= 0.0 && sample.magnitude < constants::RADAR_MAGNITUDE_CEILING,
            "magnitude out of range: {}",
            sample.magnitude
        );
    }

    assert!(!manager.is_busy(), "manager should be idle after completion");
}

/// Progress messages applied to AppState publish the report, record a
/// success line naming the archive, and navigate to the analysis view.
#[test]
fn e2e_completed_audit_updates_state_and_navigates() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_sample_archive(dir.path());

    let mut manager = AuditManager::new();
    assert!(manager.submit(archive, fast_config()));
    let messages = wait_for_terminal(&mut manager);

    let mut state = fresh_state(dir.path());
    state.show_dashboard = true;
    for msg in messages {
        state.apply_progress(msg);
    }

    assert!(!state.audit_in_progress);
    assert_eq!(state.view, DashboardView::Analysis);
    let report = state.report.as_ref().expect("report should be published");
    assert_eq!(report.entries.len(), 2);

    let success_lines: Vec<_> = state
        .activity
        .iter()
        .filter(|e| e.tag == ActivityTag::Success)
        .collect();
    assert_eq!(success_lines.len(), 1, "exactly one success line");
    assert!(
        success_lines[0].message.contains("sample-project.zip"),
        "success line should name the archive: {}",
        success_lines[0].message
    );
}

/// A file that is not a zip archive fails without a Started message, and
/// the failure leaves any previously published report untouched.
#[test]
fn e2e_corrupt_archive_fails_and_preserves_previous_report() {
    let dir = tempfile::tempdir().unwrap();

    // First: a good audit to publish a report.
    let good = write_sample_archive(dir.path());
    let mut manager = AuditManager::new();
    assert!(manager.submit(good, fast_config()));
    let good_messages = wait_for_terminal(&mut manager);

    let mut state = fresh_state(dir.path());
    for msg in good_messages {
        state.apply_progress(msg);
    }
    let errors_before = state
        .activity
        .iter()
        .filter(|e| e.tag == ActivityTag::Error)
        .count();

    // Second: garbage bytes with a .zip extension.
    let corrupt = dir.path().join("corrupt.zip");
    fs::write(&corrupt, b"this is not a zip archive").unwrap();
    assert!(manager.submit(corrupt, fast_config()));
    let messages = wait_for_terminal(&mut manager);

    assert_eq!(messages.len(), 1, "decode failure sends Failed only: {messages:?}");
    match &messages[0] {
        AuditProgress::Failed { source, error } => {
            assert_eq!(source, "corrupt.zip");
            assert!(!error.is_empty());
        }
        other => panic!("expected Failed, got {other:?}"),
    }

    let view_before = state.view;
    for msg in messages {
        state.apply_progress(msg);
    }

    let report = state.report.as_ref().expect("previous report must survive");
    assert_eq!(report.source, "sample-project.zip");
    assert_eq!(state.view, view_before, "failure must not navigate");
    assert!(!state.audit_in_progress);

    let errors_after = state
        .activity
        .iter()
        .filter(|e| e.tag == ActivityTag::Error)
        .count();
    assert_eq!(
        errors_after,
        errors_before + 1,
        "exactly one error line per failed audit"
    );
}

/// Submitting while an audit is in flight is rejected; the manager accepts
/// again once the first audit finishes.
#[test]
fn e2e_second_submit_while_busy_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_sample_archive(dir.path());

    let slow = AuditConfig {
        publish_delay: Duration::from_millis(300),
        ..Default::default()
    };

    let mut manager = AuditManager::new();
    assert!(manager.submit(archive.clone(), slow));
    assert!(manager.is_busy());
    assert!(
        !manager.submit(archive.clone(), fast_config()),
        "second submit must be rejected while busy"
    );

    let messages = wait_for_terminal(&mut manager);
    assert!(
        matches!(messages.last(), Some(AuditProgress::Completed { .. })),
        "first audit should still complete: {messages:?}"
    );

    assert!(
        manager.submit(archive, fast_config()),
        "manager should accept again after completion"
    );
    wait_for_terminal(&mut manager);
}

/// A path that does not exist fails with the archive name in the message.
#[test]
fn e2e_missing_archive_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut manager = AuditManager::new();
    assert!(manager.submit(dir.path().join("missing.zip"), fast_config()));
    let messages = wait_for_terminal(&mut manager);

    assert_eq!(messages.len(), 1);
    match &messages[0] {
        AuditProgress::Failed { source, .. } => assert_eq!(source, "missing.zip"),
        other => panic!("expected Failed, got {other:?}"),
    }
}

/// The size cap rejects oversized archives before decoding.
#[test]
fn e2e_oversized_archive_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_sample_archive(dir.path());

    let tiny_cap = AuditConfig {
        publish_delay: Duration::from_millis(10),
        max_archive_bytes: 16,
        ..Default::default()
    };

    let mut manager = AuditManager::new();
    assert!(manager.submit(archive, tiny_cap));
    let messages = wait_for_terminal(&mut manager);

    assert_eq!(messages.len(), 1);
    match &messages[0] {
        AuditProgress::Failed { error, .. } => {
            assert!(
                error.contains("exceeds maximum"),
                "error should mention the size cap: {error}"
            );
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

/// An archive holding only directory entries completes with an empty report
/// but still carries a sample for every radar axis.
#[test]
fn e2e_directory_only_archive_completes_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dirs-only.zip");
    let file = fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
    writer.add_directory("src/", options).unwrap();
    writer.add_directory("src/nested/", options).unwrap();
    writer.finish().unwrap();

    let mut manager = AuditManager::new();
    assert!(manager.submit(path, fast_config()));
    let messages = wait_for_terminal(&mut manager);

    match &messages[0] {
        AuditProgress::Started { total_files, .. } => assert_eq!(*total_files, 0),
        other => panic!("expected Started, got {other:?}"),
    }
    match &messages[1] {
        AuditProgress::Completed { report } => {
            assert!(report.entries.is_empty());
            assert_eq!(report.radar.len(), RadarAxis::all().len());
            assert_eq!(report.mean_risk(), None);
        }
        other => panic!("expected Completed, got {other:?}"),
    }
}
