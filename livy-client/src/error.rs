//! Error types for the Livy client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Livy client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, DNS or TLS failure reported by the HTTP layer
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Error status with an empty body
    #[error("HTTP status error ({status})")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Error status with a body
    #[error("Server return code {status}, response message:\n{message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Pretty-printed JSON body, or the raw body when it is not JSON
        message: String,
    },

    /// Successful response whose body is not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client configuration was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Create a server error from status code and message
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } | Self::Server { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}
