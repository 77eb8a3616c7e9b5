// Sentinel - ui/panels/analysis.rs
//
// Risk analysis view for the most recent report: summary strip, the
// vulnerability radar rendered as magnitude bars, and a virtual-scrolling
// per-file risk table.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the analysis view (dashboard central panel).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let report = match state.report {
        Some(ref r) => r,
        None => {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("No report yet. Upload an archive to run an audit.")
                        .weak(),
                );
            });
            return;
        }
    };

    let accent = theme::accent(state.theme_store.active());

    // -----------------------------------------------------------------
    // Summary strip
    // -----------------------------------------------------------------
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(theme::CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&report.source).monospace().strong());
                ui.separator();
                ui.label(format!("{} files", report.entries.len()));

                if let Some(mean) = report.mean_risk() {
                    ui.separator();
                    ui.label("Mean risk:");
                    ui.colored_label(theme::risk_colour(mean), format!("{mean:.1}"));

                    ui.separator();
                    let high = report.high_risk_count();
                    let high_colour = if high > 0 {
                        theme::risk_colour(constants::RISK_HIGH_MIN)
                    } else {
                        ui.style().visuals.text_color()
                    };
                    ui.label("High risk:");
                    ui.colored_label(high_colour, high.to_string());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(
                            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                        )
                        .small()
                        .weak(),
                    );
                });
            });
        });

    ui.add_space(12.0);

    // -----------------------------------------------------------------
    // Bug density heatmap (placeholder panel)
    // -----------------------------------------------------------------
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(theme::CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong("Bug Density Heatmap");
            ui.add_space(4.0);
            ui.add_sized(
                [ui.available_width(), 96.0],
                egui::Label::new(
                    egui::RichText::new("Heatmap visualization will appear here").weak(),
                ),
            );
        });

    ui.add_space(12.0);

    // -----------------------------------------------------------------
    // Vulnerability radar
    // -----------------------------------------------------------------
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(theme::CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong("Vulnerability Radar");
            ui.add_space(6.0);
            egui::Grid::new("analysis_radar")
                .num_columns(3)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for sample in &report.radar {
                        ui.label(sample.axis.label());
                        let frac = (sample.magnitude / constants::RADAR_MAGNITUDE_CEILING) as f32;
                        ui.add_sized(
                            [ui.available_width().max(160.0) - 60.0, 13.0],
                            egui::ProgressBar::new(frac).fill(accent),
                        );
                        ui.label(
                            egui::RichText::new(format!("{:>5.1}", sample.magnitude)).monospace(),
                        );
                        ui.end_row();
                    }
                });
        });

    ui.add_space(12.0);

    // -----------------------------------------------------------------
    // Per-file risk table
    // -----------------------------------------------------------------
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(theme::CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong("File Risk");
            ui.add_space(4.0);

            if report.entries.is_empty() {
                ui.label(egui::RichText::new("Archive contained no files.").weak());
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("analysis_entries")
                .auto_shrink([false, true])
                .max_height(320.0)
                .show_rows(ui, theme::ROW_HEIGHT, report.entries.len(), |ui, range| {
                    for entry in &report.entries[range] {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(&entry.name).monospace().size(11.5));
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.colored_label(
                                        theme::risk_colour(entry.risk),
                                        egui::RichText::new(format!("{:>5.1}", entry.risk))
                                            .monospace(),
                                    );
                                },
                            );
                        });
                    }
                });
        });
}
