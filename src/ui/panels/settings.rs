// Sentinel - ui/panels/settings.rs
//
// Settings view: theme selection (same store the header switcher drives)
// and static notification copy.

use crate::app::state::AppState;
use crate::core::model::Theme;
use crate::ui::theme;

/// Render the settings view (dashboard central panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.set_max_width(560.0);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(theme::CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.strong("Theme Preference");
            ui.label(
                egui::RichText::new(
                    "Select your preferred theme from the theme switcher in the header",
                )
                .small()
                .weak(),
            );
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let active = state.theme_store.active();
                for &candidate in Theme::all() {
                    if ui
                        .selectable_label(active == candidate, candidate.label())
                        .clicked()
                        && candidate != active
                    {
                        state.theme_store.set_active(candidate);
                        theme::apply(candidate, ui.ctx());
                    }
                }
            });

            ui.add_space(10.0);
            ui.separator();

            ui.strong("Notification Preferences");
            ui.label(
                egui::RichText::new(
                    "Configure how you want to be notified about vulnerabilities",
                )
                .small()
                .weak(),
            );
        });
}
