// Sentinel - app/audit.rs
//
// Audit lifecycle management. Runs the mock pipeline on a background
// thread, sending progress messages to the UI thread via an mpsc channel.
//
// Architecture:
//   - `AuditManager` lives on the UI thread; `run_audit` runs on a background thread.
//   - An `Arc<AtomicBool>` busy flag enforces a single audit in flight:
//     `submit` rejects while the flag is set.
//   - There is no cancellation. A submitted run always finishes or fails on
//     its own; the fixed publication delay always runs to completion.
//   - All cross-thread communication is via `AuditProgress` channel messages.

use crate::core::archive;
use crate::core::assess;
use crate::core::model::AuditProgress;
use crate::util::constants;
use crate::util::error::{ArchiveError, SentinelError};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

// =============================================================================
// Configuration
// =============================================================================

/// Limits and pacing for one audit run.
///
/// Defaults come from named constants; tests shorten the delay so the
/// pipeline completes quickly.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Pause between finishing the assessment and publishing the report.
    pub publish_delay: Duration,

    /// Maximum archive file size in bytes.
    pub max_archive_bytes: u64,

    /// Maximum number of archive entries (counting directories).
    pub max_archive_entries: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            publish_delay: Duration::from_millis(constants::ANALYSIS_DELAY_MS),
            max_archive_bytes: constants::MAX_ARCHIVE_BYTES,
            max_archive_entries: constants::MAX_ARCHIVE_ENTRIES,
        }
    }
}

// =============================================================================
// AuditManager
// =============================================================================

/// Manages audit runs on a background thread.
pub struct AuditManager {
    /// Channel receiver for the UI to poll progress messages.
    progress_rx: Option<mpsc::Receiver<AuditProgress>>,

    /// Busy flag shared with the background thread.  Set by `submit`,
    /// cleared by the worker just before its final message.
    in_flight: Arc<AtomicBool>,
}

impl AuditManager {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether an audit is currently running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit an archive for auditing.
    ///
    /// Returns `false` without side effects if an audit is already in
    /// flight.  Otherwise spawns the background run and returns `true`;
    /// progress arrives via `poll_progress`.
    pub fn submit(&mut self, path: PathBuf, config: AuditConfig) -> bool {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!(path = %path.display(), "Audit rejected: already in flight");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        let flag = Arc::clone(&self.in_flight);
        std::thread::spawn(move || {
            run_audit(path, config, tx, flag);
        });

        tracing::info!("Audit started");
        true
    }

    /// Poll for progress messages without blocking. Returns all pending messages.
    pub fn poll_progress(&self) -> Vec<AuditProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for AuditManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Background audit pipeline
// =============================================================================

/// Full audit pipeline: read, decode, assess, delay, publish.
///
/// Runs on a background thread and sends `AuditProgress` messages to `tx`.
/// Whatever the outcome, `in_flight` is cleared before the terminal message
/// is sent, so a caller that has seen the message can submit again.
fn run_audit(
    path: PathBuf,
    config: AuditConfig,
    tx: mpsc::Sender<AuditProgress>,
    in_flight: Arc<AtomicBool>,
) {
    macro_rules! send {
        ($msg:expr) => {
            if tx.send($msg).is_err() {
                // Receiver dropped (UI closed); exit quietly.
                in_flight.store(false, Ordering::SeqCst);
                return;
            }
        };
    }

    let source = source_name(&path);

    macro_rules! fail {
        ($err:expr) => {{
            let err = $err;
            tracing::warn!(source = %source, error = %err, "Audit failed");
            in_flight.store(false, Ordering::SeqCst);
            send!(AuditProgress::Failed {
                source: source.clone(),
                error: err.to_string(),
            });
            return;
        }};
    }

    // -------------------------------------------------------------------------
    // Phase 1: Read
    // -------------------------------------------------------------------------
    // Size check before the read so an oversized file is never pulled into
    // memory just to be rejected.
    match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > config.max_archive_bytes => {
            fail!(SentinelError::Archive(ArchiveError::TooLarge {
                size: meta.len(),
                max_size: config.max_archive_bytes,
            }));
        }
        Ok(_) => {}
        Err(source) => {
            fail!(SentinelError::Io {
                path: path.clone(),
                operation: "stat",
                source,
            });
        }
    }

    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(source) => {
            fail!(SentinelError::Io {
                path: path.clone(),
                operation: "read",
                source,
            });
        }
    };

    // -------------------------------------------------------------------------
    // Phase 2: Decode
    // -------------------------------------------------------------------------
    let names = match archive::enumerate_entries(&bytes, config.max_archive_entries) {
        Ok(names) => names,
        Err(e) => fail!(SentinelError::Archive(e)),
    };
    drop(bytes);

    send!(AuditProgress::Started {
        source: source.clone(),
        total_files: names.len(),
    });

    // -------------------------------------------------------------------------
    // Phase 3: Assess and publish
    // -------------------------------------------------------------------------
    let report = assess::build_report(&source, names, &mut rand::rng());
    let entry_count = report.entries.len();

    // Fixed pacing delay; always runs to completion before publication.
    std::thread::sleep(config.publish_delay);

    in_flight.store(false, Ordering::SeqCst);
    send!(AuditProgress::Completed { report });

    tracing::info!(source = %source, entries = entry_count, "Audit complete");
}

/// Display name for a submitted archive: the file name, falling back to the
/// full path for paths with no final component.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
