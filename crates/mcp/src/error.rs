//! Error types for server startup and transport I/O.

use thiserror::Error;

/// Faults that can stop a transport, as opposed to per-request JSON-RPC
/// errors which are answered inline and never terminate the process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid bind address '{address}': {reason}")]
    InvalidBindAddress { address: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl ServerError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create an invalid bind address error.
    pub fn invalid_bind_address(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBindAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_creation() {
        let err = ServerError::config("missing auth token");
        assert!(matches!(err, ServerError::Config { .. }));

        let err = ServerError::invalid_bind_address("nonsense", "not a socket address");
        assert!(matches!(err, ServerError::InvalidBindAddress { .. }));

        let err = ServerError::transport("stdout closed");
        assert!(matches!(err, ServerError::Transport { .. }));
    }

    #[test]
    fn test_error_messages_name_the_failing_input() {
        let err = ServerError::invalid_bind_address("abc", "bad port");
        assert!(err.to_string().contains("abc"));
        assert!(err.to_string().contains("bad port"));
    }
}
