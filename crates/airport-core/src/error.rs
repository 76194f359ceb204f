//! Error types for the airport client library.

use std::fmt;

use thiserror::Error;

use crate::models::ErrorCode;

/// Decoded `{code, message}` error envelope of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    /// HTTP status of the response
    pub status: u16,
    /// Server error code, closed over the codes the back office emits
    pub code: ErrorCode,
    /// Raw message given by the server
    pub message: String,
}

impl ServerError {
    /// Creates a server error from its parts.
    pub fn new(status: u16, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Classifies the error by code first, then by HTTP status for codes the
    /// client does not know.
    pub fn into_client_error(self) -> ClientError {
        match self.code {
            ErrorCode::ResourceNotFoundException => ClientError::NotFound(self),
            ErrorCode::InvalidRequestException => ClientError::Validation(self),
            ErrorCode::PersistenceException | ErrorCode::JpaSystemException => {
                ClientError::Conflict(self)
            }
            ErrorCode::Other(_) => match self.status {
                404 => ClientError::NotFound(self),
                400 | 422 => ClientError::Validation(self),
                409 => ClientError::Conflict(self),
                _ => ClientError::Server(self),
            },
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {}): {}", self.code, self.status, self.message)
    }
}

/// Comprehensive error type for all client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or connectivity failure; no response was received
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The server reports the requested entity does not exist
    #[error("Not found: {0}")]
    NotFound(ServerError),
    /// The server rejected the submitted data
    #[error("Validation failed: {0}")]
    Validation(ServerError),
    /// The entity is still referenced by dependent records
    #[error("Conflict: {0}")]
    Conflict(ServerError),
    /// Any other non-2xx response
    #[error("Server error: {0}")]
    Server(ServerError),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating transport errors with context.
pub struct TransportErrorBuilder {
    message: String,
}

impl TransportErrorBuilder {
    /// Create a new transport error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source<E>(self, source: E) -> ClientError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ClientError::Transport {
            message: self.message,
            source: Box::new(source),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ClientError {
        ClientError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ClientError {
    /// Creates a builder for transport errors.
    pub fn transport(message: impl Into<String>) -> TransportErrorBuilder {
        TransportErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The decoded server envelope, if the server answered at all.
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            Self::NotFound(e) | Self::Validation(e) | Self::Conflict(e) | Self::Server(e) => {
                Some(e)
            }
            _ => None,
        }
    }
}

/// Extension trait for Result to attach configuration context to foreign
/// errors.
pub trait ResultExt<T> {
    /// Map any error into a configuration error prefixed with `context`.
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| ClientError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
