use thiserror::Error;

/// Result type used across the spoken-time core crate.
pub type Result<T> = std::result::Result<T, SpokenTimeError>;

/// Canonical error representation for the ambient layers (config and logging).
#[derive(Debug, Error)]
pub enum SpokenTimeError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("general error: {0}")]
    GeneralError(String),
}

/// Dedicated configuration error used by the configuration module.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {key}: {source}")]
    InvalidEnvVar {
        key: String,
        #[source]
        source: std::env::VarError,
    },
}

impl From<ConfigError> for SpokenTimeError {
    fn from(value: ConfigError) -> Self {
        SpokenTimeError::ConfigError(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_keep_their_message() {
        let err = ConfigError::InvalidEnvVar {
            key: "SPOKEN_TIME_RULES".into(),
            source: std::env::VarError::NotPresent,
        };
        let wrapped = SpokenTimeError::from(err);
        assert!(matches!(wrapped, SpokenTimeError::ConfigError(_)));
        assert!(wrapped.to_string().contains("SPOKEN_TIME_RULES"));
    }
}
