// Sentinel - ui/panels/landing.rs
//
// Pre-dashboard landing screen: hero copy, the "choose directory" call to
// action, and the decorative remote-import field.  The remote-import field
// accepts text but is not wired to any network action.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the landing screen (central panel, shown until the user enters
/// the dashboard).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let accent = theme::accent(state.theme_store.active());

    ui.add_space(36.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(620.0);

        // Pulsing status badge; the repaint request keeps the animation
        // running while the landing screen is visible.
        let t = ui.input(|i| i.time);
        let pulse = 0.55 + 0.45 * ((t * 2.4).sin() * 0.5 + 0.5) as f32;
        ui.label(
            egui::RichText::new("\u{25CF} LOGS: ANONYMOUS_ACCESS_GRANTED")
                .monospace()
                .size(10.5)
                .color(accent.gamma_multiply(pulse)),
        );
        ui.ctx().request_repaint_after(std::time::Duration::from_millis(50));

        ui.add_space(18.0);
        ui.label(egui::RichText::new("AUDIT YOUR CODE").size(38.0).strong());
        ui.label(
            egui::RichText::new("IN REALTIME.")
                .size(38.0)
                .strong()
                .color(accent),
        );

        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(
                "Drop your project folder or paste a repository URL. No login, no friction.\n\
                 Receive a detailed security report and your Sentinel Score in seconds.",
            )
            .weak(),
        );

        ui.add_space(28.0);

        // -----------------------------------------------------------------
        // Terminal-styled entry card
        // -----------------------------------------------------------------
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(theme::CARD_PADDING * 2))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Scanner_Session:0x4F2A")
                            .monospace()
                            .size(10.0)
                            .weak(),
                    );
                    ui.add_space(10.0);
                    ui.label(egui::RichText::new("Analyze Local Files").size(20.0).strong());
                    ui.label(
                        egui::RichText::new("Supports .ZIP or individual source files")
                            .small()
                            .weak(),
                    );
                    ui.add_space(14.0);

                    let cta = egui::Button::new(
                        egui::RichText::new("CHOOSE DIRECTORY").strong(),
                    )
                    .min_size(egui::vec2(ui.available_width(), 40.0));
                    if ui.add(cta).clicked() {
                        state.show_dashboard = true;
                    }

                    ui.add_space(12.0);
                    ui.label(egui::RichText::new("REMOTE IMPORT").size(10.0).weak());
                    ui.add_space(6.0);

                    ui.horizontal(|ui| {
                        let button_width = 64.0;
                        ui.add_sized(
                            [ui.available_width() - button_width - 8.0, 28.0],
                            egui::TextEdit::singleline(&mut state.repo_url_input)
                                .hint_text("https://github.com/user/repository")
                                .font(egui::TextStyle::Monospace),
                        );
                        // Accepts text only; no import exists behind it.
                        let _ = ui.add_enabled(false, egui::Button::new("Import"));
                    });
                });
            });

        ui.add_space(30.0);

        // -----------------------------------------------------------------
        // Value props
        // -----------------------------------------------------------------
        ui.columns(3, |cols| {
            value_prop(&mut cols[0], "Sentinel Score", "0-100 rating based on bug density.");
            value_prop(&mut cols[1], "Logic Analysis", "Contextual reviews, not just linting.");
            value_prop(&mut cols[2], "Auto-Fixes", "One-click refactor code blocks.");
        });
    });

    // Status ticker pinned to the bottom of the screen.
    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(constants::TICKER_MESSAGES.join("   \u{00B7}   "))
                .monospace()
                .size(10.0)
                .weak(),
        );
    });
}

fn value_prop(ui: &mut egui::Ui, title: &str, blurb: &str) {
    ui.vertical_centered(|ui| {
        ui.strong(title);
        ui.label(egui::RichText::new(blurb).small().weak());
    });
}
