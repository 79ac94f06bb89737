//! Front-end configuration read from the environment.

use roster_core::default_log_level;

/// Log level override (`trace|debug|info|warn|error`).
pub const ENV_LOG_LEVEL: &str = "ROSTER_LOG_LEVEL";
/// Absolute log directory; file logging is off when unset.
pub const ENV_LOG_DIR: &str = "ROSTER_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value: &String| !value.trim().is_empty());
        Self {
            log_level: non_blank(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(ENV_LOG_DIR),
        }
    }
}
