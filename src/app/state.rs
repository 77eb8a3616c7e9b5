// Sentinel - app/state.rs
//
// Application state management. Holds navigation, the published report,
// the activity feed, and the theme store.
// Owned by the eframe::App implementation.

use crate::app::prefs::ThemeStore;
use crate::core::activity::ActivityLog;
use crate::core::model::{AuditProgress, AuditReport};
use std::path::PathBuf;

// =============================================================================
// Dashboard navigation
// =============================================================================

/// The dashboard's five views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Overview,
    Upload,
    Analysis,
    Chat,
    Settings,
}

impl DashboardView {
    /// All views in sidebar order.
    pub fn all() -> &'static [DashboardView] {
        &[
            DashboardView::Overview,
            DashboardView::Upload,
            DashboardView::Analysis,
            DashboardView::Chat,
            DashboardView::Settings,
        ]
    }

    /// Sidebar label.
    pub fn nav_label(&self) -> &'static str {
        match self {
            DashboardView::Overview => "Overview",
            DashboardView::Upload => "Upload Code",
            DashboardView::Analysis => "Risk Analysis",
            DashboardView::Chat => "AI Chat",
            DashboardView::Settings => "Settings",
        }
    }

    /// Header title.
    pub fn title(&self) -> &'static str {
        match self {
            DashboardView::Overview => "Dashboard Overview",
            DashboardView::Upload => "Upload Repository",
            DashboardView::Analysis => "Risk Analysis",
            DashboardView::Chat => "AI Code Assistant",
            DashboardView::Settings => "Settings",
        }
    }

    /// Header subtitle.
    pub fn subtitle(&self) -> &'static str {
        match self {
            DashboardView::Overview => "Monitor your code health in real-time",
            DashboardView::Upload => "Upload code via ZIP or GitHub URL",
            DashboardView::Analysis => "View bug density and vulnerability reports",
            DashboardView::Chat => "Get AI-powered code improvement suggestions",
            DashboardView::Settings => "Configure your Sentinel preferences",
        }
    }
}

// =============================================================================
// Application state
// =============================================================================

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// False while the landing page is shown.
    pub show_dashboard: bool,

    /// Active dashboard view.
    pub view: DashboardView,

    /// Active theme and its persisted slot.
    pub theme_store: ThemeStore,

    /// The published report, if any.  Replaced wholesale on completion;
    /// untouched by failed runs.
    pub report: Option<AuditReport>,

    /// Whether an audit is currently in flight.
    pub audit_in_progress: bool,

    /// Bounded most-recent-first activity feed.
    pub activity: ActivityLog,

    /// Status message for the status bar.
    pub status_message: String,

    /// Archive picked by the user, waiting to be submitted on the next
    /// frame.  Taken (and cleared) by the update loop.
    pub pending_archive: Option<PathBuf>,

    /// Remote import URL field.  Intentionally not wired to any behaviour.
    pub repo_url_input: String,

    /// Chat prompt field.  Intentionally not wired to any behaviour.
    pub chat_input: String,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state showing the landing page.
    pub fn new(theme_store: ThemeStore, max_activity_entries: usize, debug_mode: bool) -> Self {
        let mut activity = ActivityLog::new(max_activity_entries);
        activity.info("Sentinel started");

        Self {
            show_dashboard: false,
            view: DashboardView::default(),
            theme_store,
            report: None,
            audit_in_progress: false,
            activity,
            status_message: "Ready. Upload a zip archive to begin.".to_string(),
            pending_archive: None,
            repo_url_input: String::new(),
            chat_input: String::new(),
            debug_mode,
        }
    }

    /// Apply one audit progress message.
    ///
    /// `Completed` replaces the report in a single assignment (entries and
    /// radar together), appends one success line, and navigates to the
    /// analysis view.  `Failed` appends exactly one error line and leaves
    /// the published report untouched.
    pub fn apply_progress(&mut self, msg: AuditProgress) {
        match msg {
            AuditProgress::Started {
                source,
                total_files,
            } => {
                self.audit_in_progress = true;
                self.status_message = format!("Auditing '{source}': {total_files} files...");
            }
            AuditProgress::Completed { report } => {
                self.audit_in_progress = false;
                self.status_message = format!(
                    "Audit of '{}' complete: {} files assessed.",
                    report.source,
                    report.entries.len()
                );
                self.activity.success(format!(
                    "Audit of '{}' complete ({} files)",
                    report.source,
                    report.entries.len()
                ));
                self.report = Some(report);
                self.view = DashboardView::Analysis;
                self.show_dashboard = true;
            }
            AuditProgress::Failed { source, error } => {
                self.audit_in_progress = false;
                self.status_message = format!("Audit of '{source}' failed.");
                self.activity
                    .error(format!("Audit of '{source}' failed: {error}"));
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
