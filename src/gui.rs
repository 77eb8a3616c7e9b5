// Sentinel - gui.rs
//
// The eframe::App shell: frame layout, audit lifecycle, theme switching.

use crate::app::audit::{self, AuditConfig, AuditManager};
use crate::app::state::{AppState, DashboardView};
use crate::core::model::Theme;
use crate::ui;

/// The Sentinel application.
pub struct SentinelApp {
    pub state: AppState,
    pub audit: AuditManager,
}

impl SentinelApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            audit: AuditManager::new(),
        }
    }
}

impl eframe::App for SentinelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for audit progress
        let messages = self.audit.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            self.state.apply_progress(msg);
        }
        // Repaint while an audit is active so progress updates appear promptly.
        if had_messages || self.state.audit_in_progress {
            ctx.request_repaint();
        }

        // Archives dropped onto the window are staged like a picked file.
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped
            .into_iter()
            .filter_map(|f| f.path)
            .find(|p| {
                p.extension()
                    .map(|e| e.eq_ignore_ascii_case("zip"))
                    .unwrap_or(false)
            })
        {
            self.state.pending_archive = Some(path);
            self.state.show_dashboard = true;
        }

        // ---- Handle flags set by panels ----
        // pending_archive: a panel (or a window drop) staged a zip for audit.
        if let Some(path) = self.state.pending_archive.take() {
            let source = audit::source_name(&path);
            if self.audit.submit(path, AuditConfig::default()) {
                self.state.audit_in_progress = true;
                self.state.status_message = format!("Auditing '{source}'...");
                self.state
                    .activity
                    .info(format!("Audit of '{source}' submitted"));
            } else {
                self.state.status_message =
                    "An audit is already running. Wait for it to finish.".to_string();
            }
        }

        // Header: brand, active view title, theme switcher.
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let accent = ui::theme::accent(self.state.theme_store.active());
                ui.label(
                    egui::RichText::new("SENTINEL")
                        .strong()
                        .size(16.0)
                        .color(accent),
                );
                if self.state.show_dashboard {
                    ui.separator();
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(self.state.view.title()).strong());
                        ui.label(
                            egui::RichText::new(self.state.view.subtitle()).small().weak(),
                        );
                    });
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    theme_switcher(ui, &mut self.state);
                });
            });
            ui.add_space(6.0);
        });

        if self.state.show_dashboard {
            // Status bar
            egui::TopBottomPanel::bottom("status_bar")
                .exact_height(ui::theme::STATUS_BAR_HEIGHT)
                .show(ctx, |ui| {
                    ui.horizontal_centered(|ui| {
                        if self.state.audit_in_progress {
                            ui.spinner();
                        }
                        ui.label(&self.state.status_message);
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if let Some(ref report) = self.state.report {
                                    ui.label(format!("{} files", report.entries.len()));
                                }
                            },
                        );
                    });
                });

            // Left sidebar navigation
            egui::SidePanel::left("sidebar")
                .default_width(ui::theme::SIDEBAR_WIDTH)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.add_space(8.0);
                    for &view in DashboardView::all() {
                        if view == DashboardView::Settings {
                            ui.separator();
                        }
                        let selected = self.state.view == view;
                        if ui.selectable_label(selected, view.nav_label()).clicked() {
                            self.state.view = view;
                        }
                    }
                });
        }

        // Central panel: landing screen or the active dashboard view.
        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.state.show_dashboard {
                ui::panels::landing::render(ui, &mut self.state);
                return;
            }
            match self.state.view {
                DashboardView::Overview => ui::panels::overview::render(ui, &self.state),
                DashboardView::Upload => ui::panels::upload::render(ui, &mut self.state),
                DashboardView::Analysis => ui::panels::analysis::render(ui, &self.state),
                DashboardView::Chat => ui::panels::chat::render(ui, &mut self.state),
                DashboardView::Settings => ui::panels::settings::render(ui, &mut self.state),
            }
        });
    }
}

/// Theme dropdown.  Records the choice in the store (which persists it) and
/// applies the visuals in the same frame.
fn theme_switcher(ui: &mut egui::Ui, state: &mut AppState) {
    let active = state.theme_store.active();
    let mut selected = active;
    egui::ComboBox::from_id_salt("theme_switcher")
        .selected_text(selected.label())
        .width(150.0)
        .show_ui(ui, |ui| {
            for &candidate in Theme::all() {
                ui.selectable_value(&mut selected, candidate, candidate.label());
            }
        });
    if selected != active {
        state.theme_store.set_active(selected);
        ui::theme::apply(selected, ui.ctx());
    }
}
