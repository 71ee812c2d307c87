//! Environment-driven application settings.

use crate::infrastructure::logging::LoggingConfig;

pub const DB_ENV: &str = "TRADEJOURNAL_DB";
pub const LOG_LEVEL_ENV: &str = "TRADEJOURNAL_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "TRADEJOURNAL_LOG_FORMAT";
pub const DEFAULT_DB_PATH: &str = "./tradejournal.db";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.into(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read settings from the process environment (after any `.env` file
    /// has been loaded by the caller).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unset or blank keys
    /// fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            db_path: get(DB_ENV).unwrap_or(defaults.db_path),
            logging: LoggingConfig {
                level: get(LOG_LEVEL_ENV).unwrap_or(defaults.logging.level),
                format: get(LOG_FORMAT_ENV).unwrap_or(defaults.logging.format),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (DB_ENV, "/tmp/j.db"),
            (LOG_LEVEL_ENV, "debug"),
            (LOG_FORMAT_ENV, " "),
        ]);
        let config = AppConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.db_path, "/tmp/j.db");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }
}
