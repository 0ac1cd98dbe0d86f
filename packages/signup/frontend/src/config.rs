use std::sync::LazyLock;

use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone)]
pub struct Config {
    // if served from a sub path like "/space": "/space"
    pub root_path: &'static str,
    // mounts into <body> when unset
    pub mount_id: Option<&'static str>,
    pub log_level: LevelFilter,
    // kept so the logger can complain once it is up
    pub invalid_log_level: Option<&'static str>,
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let (log_level, invalid_log_level) = match option_env!("SIGNUP_LOG_LEVEL") {
        None => (default_level, None),
        Some(raw) => match parse_log_level(raw) {
            Some(level) => (level, None),
            None => (default_level, Some(raw)),
        },
    };

    Config {
        root_path: option_env!("SIGNUP_ROOT_PATH")
            .map(|path| path.trim_end_matches('/'))
            .unwrap_or(""),
        mount_id: option_env!("SIGNUP_MOUNT_ID").filter(|id| !id.is_empty()),
        log_level,
        invalid_log_level,
    }
});

pub fn parse_log_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_lowercase().as_str() {
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "info" => Some(LevelFilter::INFO),
        "warn" => Some(LevelFilter::WARN),
        "error" => Some(LevelFilter::ERROR),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info"), Some(LevelFilter::INFO));
        assert_eq!(parse_log_level(" WARN "), Some(LevelFilter::WARN));
        assert_eq!(parse_log_level("Trace"), Some(LevelFilter::TRACE));
        assert_eq!(parse_log_level("off"), Some(LevelFilter::OFF));
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level(""), None);
    }
}
