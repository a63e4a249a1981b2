use tracing::Level;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "DEAL_UI_LOG";

pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Log level from `DEAL_UI_LOG`, falling back to `info`.
pub fn log_level() -> Level {
    parse_log_level(std::env::var(LOG_LEVEL_VAR).ok().as_deref())
}

/// Parse a level name; missing or unknown values yield the default.
pub fn parse_log_level(raw: Option<&str>) -> Level {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}
