// Sentinel - ui/panels/upload.rs
//
// Archive staging view.  The picker stages a zip path in `pending_archive`;
// the app shell submits it to the audit manager on the next frame.  Dropping
// a file onto the window is handled by the shell, not here.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the upload view (dashboard central panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(640.0);
        ui.add_space(8.0);

        // -----------------------------------------------------------------
        // Drop zone
        // -----------------------------------------------------------------
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(theme::CARD_PADDING * 3))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("Drop your ZIP file here").size(20.0).strong());
                    ui.label(egui::RichText::new("or click to browse").weak());
                    ui.add_space(12.0);

                    let busy = state.audit_in_progress;
                    if ui
                        .add_enabled(!busy, egui::Button::new("Select Files"))
                        .clicked()
                    {
                        if let Some(path) = rfd::FileDialog::new()
                            .set_title("Select an archive to audit")
                            .add_filter("Zip archives", &["zip"])
                            .pick_file()
                        {
                            state.pending_archive = Some(path);
                        }
                    }

                    if busy {
                        ui.add_space(10.0);
                        ui.spinner();
                        ui.label(egui::RichText::new("Audit in progress...").weak());
                    }
                });
            });

        ui.add_space(10.0);
        ui.label(egui::RichText::new("OR").weak());
        ui.add_space(10.0);

        // -----------------------------------------------------------------
        // GitHub URL input
        // -----------------------------------------------------------------
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(theme::CARD_PADDING))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.strong("Import from GitHub");
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let button_width = 64.0;
                    ui.add_sized(
                        [ui.available_width() - button_width - 8.0, 28.0],
                        egui::TextEdit::singleline(&mut state.repo_url_input)
                            .hint_text("https://github.com/username/repo"),
                    );
                    // Accepts text only; no import exists behind it.
                    let _ = ui.add_enabled(false, egui::Button::new("Import"));
                });
            });
    });
}
