use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Incoming conversion request carrying a `HH:mm` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRequest {
    pub time: String,
}

impl TimeRequest {
    pub fn new(time: impl Into<String>) -> Self {
        Self { time: time.into() }
    }
}

/// Successful conversion, echoing the original input next to its spoken form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeResponse {
    pub time: String,
    pub spoken_form: String,
}

impl TimeResponse {
    pub fn new(time: impl Into<String>, spoken_form: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            spoken_form: spoken_form.into(),
        }
    }
}

pub const BAD_REQUEST: u16 = 400;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Failure envelope handed back to whichever transport sits in front of the converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorResponse {
    pub fn new(
        status: u16,
        error: impl Into<String>,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            status,
            error: error.into(),
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(BAD_REQUEST, "Bad Request", message, path)
    }

    pub fn internal_error(path: impl Into<String>) -> Self {
        Self::new(
            INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "An unexpected error occurred. Please try again later.",
            path,
        )
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}
