// Sentinel - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config and theme preference loading
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export the library crate's modules so binary-side code (`gui.rs`)
// can keep using `crate::app::...` style paths.
pub use sentinel::app;
pub use sentinel::core;
pub use sentinel::platform;
pub use sentinel::ui;
pub use sentinel::util;

use clap::Parser;
use std::path::PathBuf;

/// Scale the default egui text styles around the configured body size.
fn configure_text_sizes(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    for (text_style, font_id) in style.text_styles.iter_mut() {
        font_id.size = match text_style {
            egui::TextStyle::Small => font_size - 2.5,
            egui::TextStyle::Body | egui::TextStyle::Button => font_size,
            egui::TextStyle::Monospace => font_size - 1.0,
            egui::TextStyle::Heading => font_size + 6.0,
            egui::TextStyle::Name(_) => font_id.size,
        };
    }
    ctx.set_style(style);
}

/// Sentinel - Mock security-audit dashboard.
///
/// Launches the desktop shell. Point it at a zip archive to start an audit
/// immediately, or use the upload view after launch.
#[derive(Parser, Debug)]
#[command(name = "Sentinel", version, about)]
struct Cli {
    /// Zip archive to audit at startup (opens the dashboard directly).
    archive: Option<PathBuf>,

    /// Directory containing config.toml (overrides the platform default).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging init so the
    // configured log level can take effect.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .as_deref()
        .unwrap_or(&platform_paths.config_dir);
    let (config, config_warnings) = platform::config::load_config(config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "Sentinel starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Load the persisted theme preference (falls back to the default theme
    // when the prefs file is missing or unreadable).
    let theme_store = app::prefs::ThemeStore::load(&platform_paths.data_dir);

    tracing::info!(theme = theme_store.active().id(), "Ready to launch GUI");

    let mut state = app::state::AppState::new(
        theme_store,
        config.max_activity_entries,
        cli.debug,
    );

    // If an archive was provided on the CLI, stage it and open the dashboard;
    // the shell submits it on the first frame.
    if let Some(archive) = cli.archive {
        state.pending_archive = Some(archive);
        state.show_dashboard = true;
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_text_sizes(&cc.egui_ctx, font_size);
            ui::theme::apply(state.theme_store.active(), &cc.egui_ctx);
            Ok(Box::new(gui::SentinelApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Sentinel GUI: {e}");
        std::process::exit(1);
    }
}
