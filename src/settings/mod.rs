//! Runtime settings for the demo binary, read from the environment.

use std::env;

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "PASSGEN_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    pub color: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok(), crate::terminal::is_interactive())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>, interactive: bool) -> Self {
        let defaults = Settings::default();
        let log_filter = lookup(LOG_ENV)
            .map(|filter| filter.trim().to_string())
            .filter(|filter| !filter.is_empty())
            .unwrap_or(defaults.log_filter);
        // https://no-color.org: any non-empty value disables colour.
        let no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty());

        Self {
            log_filter,
            color: interactive && !no_color,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            color: false,
        }
    }
}
