use std::env;
use std::path::PathBuf;

use crate::errors::{ConfigError, SpokenTimeError};

pub const DEFAULT_PREFIX: &str = "SPOKEN_TIME_";

/// Runtime environment used by the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    fn from_str(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Development,
        }
    }
}

/// Process-wide settings for converters and the command-line front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpokenTimeConfig {
    pub environment: Environment,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    /// Rule file or directory replacing the built-in table.
    pub rules_path: Option<PathBuf>,
}

impl SpokenTimeConfig {
    /// Loads configuration from the process environment (and `.env`, when present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env_with_prefix(DEFAULT_PREFIX)
    }

    /// Loads configuration from env vars prefixed with the provided value (e.g. `SPOKEN_TIME_`).
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        let key = |suffix: &str| format!("{}{}", prefix, suffix);

        let environment = read_optional(&key("ENV"))?
            .map(|raw| Environment::from_str(&raw))
            .unwrap_or_default();
        let log_level = read_optional(&key("LOG"))?;
        let rules_path = read_optional(&key("RULES"))?.map(PathBuf::from);

        Ok(Self {
            environment,
            log_level,
            rules_path,
        })
    }

    /// Whether the process is running in production.
    pub fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    /// The configured log level, or a quieter default in production.
    pub fn default_log_level(&self) -> &str {
        match self.log_level() {
            Some(level) => level,
            None if self.is_production() => "error",
            None => "warn",
        }
    }
}

fn read_optional(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::InvalidEnvVar {
            key: key.to_string(),
            source,
        }),
    }
}

/// Helper that loads config and converts to the canonical error type.
pub fn load_config() -> Result<SpokenTimeConfig, SpokenTimeError> {
    Ok(SpokenTimeConfig::from_env()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = SpokenTimeConfig::from_env_with_prefix("SPOKEN_TIME_TEST_EMPTY_")
            .expect("config should load");
        assert_eq!(cfg, SpokenTimeConfig::default());
        assert_eq!(cfg.environment, Environment::Development);
    }

    #[test]
    fn reads_prefixed_variables() {
        env::set_var("SPOKEN_TIME_TEST_SET_ENV", "prod");
        env::set_var("SPOKEN_TIME_TEST_SET_LOG", "debug");
        env::set_var("SPOKEN_TIME_TEST_SET_RULES", "/etc/spoken-time/rules.yaml");

        let cfg = SpokenTimeConfig::from_env_with_prefix("SPOKEN_TIME_TEST_SET_")
            .expect("config should load");

        assert!(cfg.is_production());
        assert_eq!(cfg.log_level(), Some("debug"));
        assert_eq!(cfg.default_log_level(), "debug");
        assert_eq!(
            cfg.rules_path,
            Some(PathBuf::from("/etc/spoken-time/rules.yaml"))
        );
    }

    #[test]
    fn production_defaults_to_a_quieter_log_level() {
        let mut cfg = SpokenTimeConfig::default();
        assert_eq!(cfg.default_log_level(), "warn");

        cfg.environment = Environment::Production;
        assert_eq!(cfg.default_log_level(), "error");

        env::set_var("SPOKEN_TIME_TEST_STAGE_ENV", "stage");
        let staging = SpokenTimeConfig::from_env_with_prefix("SPOKEN_TIME_TEST_STAGE_")
            .expect("config should load");
        assert_eq!(staging.environment, Environment::Staging);
        assert_eq!(staging.default_log_level(), "warn");
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_values_become_config_errors() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("SPOKEN_TIME_TEST_BAD_LOG", OsStr::from_bytes(b"fo\x80"));
        let err = SpokenTimeConfig::from_env_with_prefix("SPOKEN_TIME_TEST_BAD_").unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar { ref key, .. } if key == "SPOKEN_TIME_TEST_BAD_LOG")
        );
        assert!(matches!(
            SpokenTimeError::from(err),
            SpokenTimeError::ConfigError(_)
        ));
    }

    #[test]
    fn unknown_environment_falls_back_to_development() {
        env::set_var("SPOKEN_TIME_TEST_ODD_ENV", "qa-cluster");
        let cfg = SpokenTimeConfig::from_env_with_prefix("SPOKEN_TIME_TEST_ODD_")
            .expect("config should load");
        assert_eq!(cfg.environment, Environment::Development);
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        env::set_var("SPOKEN_TIME_TEST_BLANK_RULES", "   ");
        let cfg = SpokenTimeConfig::from_env_with_prefix("SPOKEN_TIME_TEST_BLANK_")
            .expect("config should load");
        assert!(cfg.rules_path.is_none());
    }
}
