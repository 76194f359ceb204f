//! Server error codes and the error envelope carrying them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error codes the back office reports in the `code` field of its error
/// envelope. Anything unrecognized is kept verbatim in [`ErrorCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    PersistenceException,
    JpaSystemException,
    InvalidRequestException,
    ResourceNotFoundException,
    Other(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::PersistenceException => "PersistenceException",
            ErrorCode::JpaSystemException => "JpaSystemException",
            ErrorCode::InvalidRequestException => "InvalidRequestException",
            ErrorCode::ResourceNotFoundException => "ResourceNotFoundException",
            ErrorCode::Other(code) => code,
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "PersistenceException" => ErrorCode::PersistenceException,
            "JpaSystemException" => ErrorCode::JpaSystemException,
            "InvalidRequestException" => ErrorCode::InvalidRequestException,
            "ResourceNotFoundException" => ErrorCode::ResourceNotFoundException,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body of a non-2xx response: `{code, message}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
