// Sentinel - ui/theme.rs
//
// Theme palettes, risk colour banding, and layout constants.
// No dependencies on app state or business logic.

use crate::core::activity::ActivityTag;
use crate::core::model::Theme;
use crate::util::constants;
use egui::{Color32, Stroke, Visuals};

/// Apply a theme to the egui context.
///
/// Called once at startup and synchronously whenever the user switches
/// theme, after the store has recorded the change.
pub fn apply(theme: Theme, ctx: &egui::Context) {
    ctx.set_visuals(visuals(theme));
}

/// Full widget visuals for a theme.
pub fn visuals(theme: Theme) -> Visuals {
    match theme {
        Theme::Midnight => midnight(),
        Theme::Matrix => matrix(),
        Theme::Solaris => solaris(),
        Theme::Dracula => dracula(),
    }
}

/// Accent colour for a theme (headings, active nav item, primary actions).
pub fn accent(theme: Theme) -> Color32 {
    match theme {
        Theme::Midnight => Color32::from_rgb(0, 229, 255),   // Cyan
        Theme::Matrix => Color32::from_rgb(0, 255, 102),     // Terminal green
        Theme::Solaris => Color32::from_rgb(217, 93, 14),    // Burnt orange
        Theme::Dracula => Color32::from_rgb(189, 147, 249),  // Purple
    }
}

/// Colour for a risk value: green, amber, and red bands.
pub fn risk_colour(risk: f64) -> Color32 {
    if risk < constants::RISK_LOW_MAX {
        Color32::from_rgb(34, 197, 94) // Green 500
    } else if risk < constants::RISK_HIGH_MIN {
        Color32::from_rgb(217, 119, 6) // Amber 600
    } else {
        Color32::from_rgb(220, 38, 38) // Red 600
    }
}

/// Colour for an activity feed tag.
pub fn tag_colour(tag: ActivityTag) -> Color32 {
    match tag {
        ActivityTag::Info => Color32::from_rgb(209, 213, 219),   // Gray 300
        ActivityTag::Success => Color32::from_rgb(34, 197, 94),  // Green 500
        ActivityTag::Error => Color32::from_rgb(220, 38, 38),    // Red 600
    }
}

// =============================================================================
// Palettes
// =============================================================================

/// Dark navy with cyan accents. The primary palette.
fn midnight() -> Visuals {
    let accent = accent(Theme::Midnight);
    let mut v = Visuals::dark();
    v.panel_fill = Color32::from_rgb(13, 17, 28);
    v.window_fill = Color32::from_rgb(17, 22, 35);
    v.extreme_bg_color = Color32::from_rgb(9, 12, 20);
    v.faint_bg_color = Color32::from_rgb(21, 27, 43);
    v.code_bg_color = Color32::from_rgb(9, 12, 20);
    v.override_text_color = Some(Color32::from_rgb(205, 214, 230));
    v.hyperlink_color = accent;
    v.selection.bg_fill = Color32::from_rgb(0, 72, 84);
    v.selection.stroke = Stroke::new(1.0, accent);
    v.window_stroke = Stroke::new(1.0, Color32::from_rgb(38, 48, 70));
    v
}

/// Green-on-black terminal.
fn matrix() -> Visuals {
    let accent = accent(Theme::Matrix);
    let mut v = Visuals::dark();
    v.panel_fill = Color32::from_rgb(5, 10, 6);
    v.window_fill = Color32::from_rgb(8, 14, 9);
    v.extreme_bg_color = Color32::from_rgb(2, 6, 3);
    v.faint_bg_color = Color32::from_rgb(10, 20, 12);
    v.code_bg_color = Color32::from_rgb(2, 6, 3);
    v.override_text_color = Some(Color32::from_rgb(168, 224, 176));
    v.hyperlink_color = accent;
    v.selection.bg_fill = Color32::from_rgb(8, 72, 28);
    v.selection.stroke = Stroke::new(1.0, accent);
    v.window_stroke = Stroke::new(1.0, Color32::from_rgb(20, 50, 26));
    v
}

/// Warm light palette.
fn solaris() -> Visuals {
    let accent = accent(Theme::Solaris);
    let mut v = Visuals::light();
    v.panel_fill = Color32::from_rgb(250, 246, 238);
    v.window_fill = Color32::from_rgb(244, 238, 226);
    v.extreme_bg_color = Color32::from_rgb(255, 252, 246);
    v.faint_bg_color = Color32::from_rgb(240, 232, 216);
    v.code_bg_color = Color32::from_rgb(240, 232, 216);
    v.override_text_color = Some(Color32::from_rgb(62, 50, 38));
    v.hyperlink_color = accent;
    v.selection.bg_fill = Color32::from_rgb(250, 214, 182);
    v.selection.stroke = Stroke::new(1.0, accent);
    v.window_stroke = Stroke::new(1.0, Color32::from_rgb(216, 204, 184));
    v
}

/// Purple-accented dark palette.
fn dracula() -> Visuals {
    let accent = accent(Theme::Dracula);
    let mut v = Visuals::dark();
    v.panel_fill = Color32::from_rgb(40, 42, 54);
    v.window_fill = Color32::from_rgb(33, 34, 44);
    v.extreme_bg_color = Color32::from_rgb(27, 28, 37);
    v.faint_bg_color = Color32::from_rgb(48, 51, 66);
    v.code_bg_color = Color32::from_rgb(27, 28, 37);
    v.override_text_color = Some(Color32::from_rgb(248, 248, 242));
    v.hyperlink_color = Color32::from_rgb(255, 121, 198); // Pink
    v.selection.bg_fill = Color32::from_rgb(68, 71, 90);
    v.selection.stroke = Stroke::new(1.0, accent);
    v.window_stroke = Stroke::new(1.0, Color32::from_rgb(58, 60, 78));
    v
}

// =============================================================================
// Layout constants
// =============================================================================

pub const SIDEBAR_WIDTH: f32 = 220.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
pub const ROW_HEIGHT: f32 = 20.0;

/// Inner margin for card frames (egui margins are whole points).
pub const CARD_PADDING: i8 = 12;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_colour_bands() {
        assert_eq!(risk_colour(0.0), Color32::from_rgb(34, 197, 94));
        assert_eq!(risk_colour(29.9), Color32::from_rgb(34, 197, 94));
        assert_eq!(risk_colour(30.0), Color32::from_rgb(217, 119, 6));
        assert_eq!(risk_colour(69.9), Color32::from_rgb(217, 119, 6));
        assert_eq!(risk_colour(70.0), Color32::from_rgb(220, 38, 38));
        assert_eq!(risk_colour(99.9), Color32::from_rgb(220, 38, 38));
    }

    #[test]
    fn test_every_theme_has_distinct_visuals() {
        let fills: Vec<Color32> = Theme::all()
            .iter()
            .map(|&t| visuals(t).panel_fill)
            .collect();
        for (i, a) in fills.iter().enumerate() {
            for b in fills.iter().skip(i + 1) {
                assert_ne!(a, b, "two themes share a panel fill");
            }
        }
    }

    #[test]
    fn test_solaris_is_the_only_light_theme() {
        assert!(!visuals(Theme::Solaris).dark_mode);
        assert!(visuals(Theme::Midnight).dark_mode);
        assert!(visuals(Theme::Matrix).dark_mode);
        assert!(visuals(Theme::Dracula).dark_mode);
    }
}
