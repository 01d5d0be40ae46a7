/// Initialize tracing/logging for the relay.
///
/// Uses a simple `with_max_level` configuration based on `default_level`.
pub fn init(default_level: &str) {
    let lvl = level_from_str(default_level);

    // try_init: tests and embedding applications may already own a subscriber
    let _ = tracing_subscriber::fmt()
        .with_max_level(lvl)
        .with_target(false)
        .try_init();
}

/// Level used when the debug flag is set or not.
pub fn level_for(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

fn level_from_str(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "error" => tracing::Level::ERROR,
        "warn" | "warning" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    }
}

#[cfg(test)]
pub(crate) fn parse_level(level: &str) -> tracing::Level {
    level_from_str(level)
}
