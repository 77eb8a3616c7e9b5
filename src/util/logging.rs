// Sentinel - util/logging.rs
//
// tracing setup. Verbosity comes from the first of: RUST_LOG, the
// --debug flag, [logging] level in config.toml, the built-in default.
// Output goes to stderr; no secrets or file contents at any level.

use tracing_subscriber::EnvFilter;

fn select_filter(debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }
    if debug_flag {
        return EnvFilter::new("debug");
    }
    match config_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL),
    }
}

/// Install the global tracing subscriber.
///
/// `debug_flag` reflects --debug on the CLI; `config_level` is the level
/// named in config.toml, if any. Call once, before any logging.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(select_filter(debug_flag, config_level))
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging ready"
    );
}
