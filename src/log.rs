use log::LevelFilter;

/// Initialize logging for the crucigrama CLI.
///
/// Respects `debug_enabled` for the default level; an explicit `RUST_LOG`
/// overrides it. Output stays terse (no timestamps, no module paths) since
/// the CLI's stdout carries the JSON payload.
pub fn init_logger(debug_enabled: bool) {
    use std::env;
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
    log::debug!("Logger initialized at {level:?} level");
}
