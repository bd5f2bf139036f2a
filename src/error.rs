//! Error types for tdo
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad input, bad config)
//! - 3: Task not found
//! - 4: Operation failed (IO, serialization)

use thiserror::Error;

/// Exit codes for the tdo CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const NOT_FOUND: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for tdo operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Task text must not be empty")]
    EmptyText,

    #[error("Invalid task id: {0}")]
    InvalidTaskId(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Missing records (exit code 3)
    #[error("Task {0} not found")]
    TaskNotFound(u64),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::EmptyText
            | Error::InvalidTaskId(_)
            | Error::InvalidBody(_)
            | Error::InvalidConfig(_) => exit_codes::USER_ERROR,
            Error::TaskNotFound(_) => exit_codes::NOT_FOUND,
            Error::Io(_) | Error::Json(_) | Error::TomlParse(_) | Error::OperationFailed(_) => {
                exit_codes::OPERATION_FAILED
            }
        }
    }

    /// HTTP status for the API error body
    pub fn http_status(&self) -> u16 {
        match self {
            Error::EmptyText
            | Error::InvalidTaskId(_)
            | Error::InvalidBody(_)
            | Error::InvalidConfig(_) => 400,
            Error::TaskNotFound(_) => 404,
            Error::Io(_) | Error::Json(_) | Error::TomlParse(_) | Error::OperationFailed(_) => 500,
        }
    }
}

/// Result type alias for tdo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
        }
    }
}
