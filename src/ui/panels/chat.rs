// Sentinel - ui/panels/chat.rs
//
// AI assistant view.  Mock surface: the transcript is a placeholder and the
// send button is disabled.  The input is kept in state so typed text
// survives view switches.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the chat view (dashboard central panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(theme::CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            let input_height = 30.0;
            let transcript_height =
                (ui.available_height() - input_height - 16.0).max(140.0);
            ui.add_sized(
                [ui.available_width(), transcript_height],
                egui::Label::new(
                    egui::RichText::new("Ask me anything about your code...").weak(),
                ),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let button_width = 56.0;
                ui.add_sized(
                    [ui.available_width() - button_width - 8.0, input_height - 4.0],
                    egui::TextEdit::singleline(&mut state.chat_input)
                        .hint_text("How do I fix the security risk in auth.py?"),
                );
                // No assistant behind it yet.
                let _ = ui.add_enabled(false, egui::Button::new("Send"));
            });
        });
}
