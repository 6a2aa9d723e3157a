use std::path::PathBuf;

use spoken_time_protocol::dto::{BAD_REQUEST, INTERNAL_SERVER_ERROR};
use spoken_time_protocol::Time;
use thiserror::Error;

/// Failures raised while turning an input into its spoken form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The input does not split into exactly two numeric segments.
    #[error("invalid time format {input:?}: {reason}")]
    Format { input: String, reason: &'static str },
    /// Both segments are numeric but fall outside the clock.
    #[error("hour must be 0-23 and minute must be 0-59: {input}")]
    Range { input: String },
    /// A `Time` reached the renderer without satisfying its bounds.
    #[error("invalid time provided: {0}")]
    InvalidTime(Time),
    /// No enabled rule claimed the time; the rule table is not total.
    #[error("no rule found to handle time: {0}")]
    NoRule(Time),
    /// A phrase asked a word table for a numeral it does not hold.
    #[error("{table} must be between {min} and {max}: {value}")]
    OutOfRange {
        table: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

impl ConversionError {
    pub fn format(input: impl Into<String>, reason: &'static str) -> Self {
        ConversionError::Format {
            input: input.into(),
            reason,
        }
    }

    pub fn range(input: impl Into<String>) -> Self {
        ConversionError::Range {
            input: input.into(),
        }
    }

    /// Whether the failure was caused by the caller's input rather than an internal defect.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ConversionError::Format { .. }
                | ConversionError::Range { .. }
                | ConversionError::InvalidTime(_)
        )
    }

    /// HTTP-style status a transport should answer with.
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            BAD_REQUEST
        } else {
            INTERNAL_SERVER_ERROR
        }
    }
}

/// Errors returned by the rules engine when loading or validating rule sets.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rules path does not exist: {0}")]
    MissingPath(String),
    #[error("failed to read rules from {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse rules from {path}: {message}")]
    Parse { path: String, message: String },
    #[error("failed to serialize rules: {0}")]
    Serialize(String),
    #[error("duplicate rule identifier detected: {id}")]
    DuplicateRule { id: String },
    #[error("rule set does not handle {time}")]
    Incomplete {
        time: Time,
        #[source]
        source: ConversionError,
    },
}

impl RuleError {
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RuleError::Io {
            path: path.into().display().to_string(),
            source,
        }
    }

    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        RuleError::Parse {
            path: path.into().display().to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_map_to_bad_request() {
        assert_eq!(ConversionError::format("", "empty").status_code(), 400);
        assert_eq!(ConversionError::range("25:00").status_code(), 400);
        assert_eq!(ConversionError::InvalidTime(Time::new(25, 0)).status_code(), 400);
    }

    #[test]
    fn defects_map_to_server_error() {
        let missing = ConversionError::NoRule(Time::new(3, 3));
        let table = ConversionError::OutOfRange {
            table: "hour",
            value: 0,
            min: 1,
            max: 12,
        };

        assert!(!missing.is_client_error());
        assert_eq!(missing.status_code(), 500);
        assert_eq!(table.status_code(), 500);
    }

    #[test]
    fn range_message_names_bounds() {
        let message = ConversionError::range("12:60").to_string();
        assert_eq!(message, "hour must be 0-23 and minute must be 0-59: 12:60");
    }
}
