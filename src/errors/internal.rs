use thiserror::Error;

use crate::config::{ApplicationError, LoggingError};

/// Errors that stop the service from starting or running
///
/// Not exposed via API; request handlers only ever answer with their
/// own response variants.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error("Configuration error: {0}")]
    Config(#[from] ApplicationError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("Server error: {operation} failed: {source}")]
    Server {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl InternalError {
    /// Create a server I/O error with context
    pub fn server(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Server {
            operation: operation.into(),
            source,
        }
    }
}
