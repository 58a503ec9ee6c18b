/*
[INPUT]:  Error sources (HTTP transport, service responses, local validation)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the tasklist client
#[derive(Error, Debug)]
pub enum TasklistError {
    /// HTTP transport failed (connect, timeout, broken body)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("service error (status {status}): {detail}")]
    Service { status: u16, detail: String },

    /// Local precondition violated; no request was sent
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// An autogeneration call is already in flight on this panel
    #[error("task generation already in progress")]
    Busy,

    /// Success response whose body is not valid JSON of the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl TasklistError {
    /// Build a service error from a status code and an optional server detail
    pub fn service(status: StatusCode, detail: Option<String>) -> Self {
        TasklistError::Service {
            status: status.as_u16(),
            detail: detail.unwrap_or_else(|| "request failed".to_string()),
        }
    }

    /// Build a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        TasklistError::Validation {
            message: message.into(),
        }
    }

    /// Check if the error was raised before any request left the client
    pub fn is_validation(&self) -> bool {
        matches!(self, TasklistError::Validation { .. })
    }

    /// HTTP status of a service error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            TasklistError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for tasklist operations
pub type Result<T> = std::result::Result<T, TasklistError>;
