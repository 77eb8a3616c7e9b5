// Sentinel - ui/panels/overview.rs
//
// Dashboard overview: headline stat cards, recent scans, and the activity
// feed.  The stat cards and the canned scan history are static copy; the
// activity feed is live.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the overview view (dashboard central panel).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    // -----------------------------------------------------------------
    // Stat cards
    // -----------------------------------------------------------------
    ui.columns(constants::OVERVIEW_STATS.len(), |cols| {
        for (col, (title, value, change)) in cols.iter_mut().zip(constants::OVERVIEW_STATS) {
            stat_card(col, title, value, change);
        }
    });

    ui.add_space(12.0);

    // -----------------------------------------------------------------
    // Recent scans: latest real report first, then canned history
    // -----------------------------------------------------------------
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(theme::CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong("Recent Scans");
            ui.add_space(6.0);

            if let Some(ref report) = state.report {
                scan_row(
                    ui,
                    &report.source,
                    &report.generated_at.format("%H:%M:%S UTC").to_string(),
                    "completed",
                );
            }
            for (repo, time) in [
                ("frontend-app", "2 mins ago"),
                ("api-service", "1 hour ago"),
                ("auth-module", "3 hours ago"),
            ] {
                scan_row(ui, repo, time, "completed");
            }
        });

    ui.add_space(12.0);

    // -----------------------------------------------------------------
    // Activity feed
    // -----------------------------------------------------------------
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(theme::CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong(format!("Activity ({})", state.activity.len()));
            ui.add_space(6.0);

            if state.activity.is_empty() {
                ui.label(egui::RichText::new("No activity yet.").weak());
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("overview_activity")
                .max_height(240.0)
                .show(ui, |ui| {
                    egui::Grid::new("overview_activity_grid")
                        .num_columns(3)
                        .striped(true)
                        .spacing([10.0, 3.0])
                        .show(ui, |ui| {
                            for entry in state.activity.iter() {
                                ui.label(
                                    egui::RichText::new(
                                        entry.timestamp.format("%H:%M:%S").to_string(),
                                    )
                                    .monospace()
                                    .size(11.0)
                                    .weak(),
                                );
                                ui.colored_label(
                                    theme::tag_colour(entry.tag),
                                    egui::RichText::new(entry.tag.short_label())
                                        .monospace()
                                        .size(11.0),
                                );
                                ui.label(&entry.message);
                                ui.end_row();
                            }
                        });
                });
        });
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: &str, change: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(theme::CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).small().weak());
            ui.label(egui::RichText::new(value).size(26.0).strong());

            let colour = if change.starts_with('+') {
                egui::Color32::from_rgb(34, 197, 94)
            } else if change.starts_with('-') {
                egui::Color32::from_rgb(220, 38, 38)
            } else {
                ui.style().visuals.weak_text_color()
            };
            ui.label(
                egui::RichText::new(format!("{change} from last scan"))
                    .small()
                    .color(colour),
            );
        });
}

fn scan_row(ui: &mut egui::Ui, repo: &str, time: &str, status: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(repo).monospace());
        ui.label(egui::RichText::new(time).small().weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(status).small().weak());
        });
    });
}
