//! Runtime settings read from the environment.
//!
//! A `.env` file is loaded by `main` before [`Settings::from_env`] runs, so
//! either source works.

use crate::error::ConfigError;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

/// Path of a log4rs YAML file to load instead of the built-in stderr logger.
pub const LOG_CONFIG_VAR: &str = "CIDR_CONTAINS_LOG_CONFIG";
/// Root level of the built-in stderr logger.
pub const LOG_LEVEL_VAR: &str = "CIDR_CONTAINS_LOG_LEVEL";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// log4rs config file, used only if it exists.
    pub log_config: PathBuf,
    /// Level for the fallback stderr logger.
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Settings, ConfigError> {
        Settings::from_vars(|var| std::env::var(var).ok())
    }

    /// Build settings from a variable lookup; unset or blank variables keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        let lookup = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(path) = lookup(LOG_CONFIG_VAR) {
            settings.log_config = PathBuf::from(path);
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            settings.log_level = LevelFilter::from_str(level.trim()).map_err(|_| {
                ConfigError::InvalidLogLevel {
                    var: LOG_LEVEL_VAR,
                    value: level.clone(),
                }
            })?;
        }

        log::trace!("settings={:?}", settings);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_vars(|var| map.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = from_map(&[]).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_config, PathBuf::from("log4rs.yml"));
        assert_eq!(settings.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_overrides() {
        let settings = from_map(&[
            (LOG_CONFIG_VAR, "/etc/cidr-contains/log4rs.yml"),
            (LOG_LEVEL_VAR, "Debug"),
        ])
        .unwrap();
        assert_eq!(
            settings.log_config,
            PathBuf::from("/etc/cidr-contains/log4rs.yml")
        );
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let settings = from_map(&[(LOG_CONFIG_VAR, ""), (LOG_LEVEL_VAR, "  ")]).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_off_level() {
        let settings = from_map(&[(LOG_LEVEL_VAR, "off")]).unwrap();
        assert_eq!(settings.log_level, LevelFilter::Off);
    }

    #[test]
    fn test_invalid_level() {
        assert_eq!(
            from_map(&[(LOG_LEVEL_VAR, "loud")]).unwrap_err(),
            ConfigError::InvalidLogLevel {
                var: LOG_LEVEL_VAR,
                value: "loud".to_string()
            }
        );
    }
}
