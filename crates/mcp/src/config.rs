//! Environment-driven server configuration.

use crate::error::ServerError;

/// Bearer token the HTTP transport compares `Authorization` headers against.
pub const AUTH_TOKEN_ENV: &str = "NODEFLOW_AUTH_TOKEN";

/// Optional bind address override for the HTTP transport.
pub const HTTP_BIND_ENV: &str = "NODEFLOW_HTTP_BIND";

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// Runtime configuration resolved from the process environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bearer token for the HTTP transport. Absent for stdio-only use.
    pub auth_token: Option<String>,
    /// Bind address string for the HTTP transport.
    pub bind_address: String,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// Empty values are treated as unset so that `NODEFLOW_AUTH_TOKEN=""`
    /// cannot silently authenticate empty bearer tokens.
    pub fn from_env() -> Self {
        Self {
            auth_token: env_non_empty(AUTH_TOKEN_ENV),
            bind_address: env_non_empty(HTTP_BIND_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        }
    }

    /// Return the auth token, failing when the HTTP transport would
    /// otherwise start without authentication.
    pub fn require_auth_token(&self) -> Result<&str, ServerError> {
        self.auth_token
            .as_deref()
            .ok_or_else(|| ServerError::config(format!("{AUTH_TOKEN_ENV} must be set to serve the HTTP transport")))
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset([AUTH_TOKEN_ENV, HTTP_BIND_ENV], || {
            let config = ServerConfig::from_env();
            assert!(config.auth_token.is_none());
            assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
            assert!(config.require_auth_token().is_err());
        });
    }

    #[test]
    fn test_from_env_reads_overrides() {
        temp_env::with_vars(
            [(AUTH_TOKEN_ENV, Some("secret-token")), (HTTP_BIND_ENV, Some("127.0.0.1:0"))],
            || {
                let config = ServerConfig::from_env();
                assert_eq!(config.require_auth_token().unwrap(), "secret-token");
                assert_eq!(config.bind_address, "127.0.0.1:0");
            },
        );
    }

    #[test]
    fn test_empty_auth_token_is_treated_as_unset() {
        temp_env::with_vars([(AUTH_TOKEN_ENV, Some(""))], || {
            let config = ServerConfig::from_env();
            assert!(config.auth_token.is_none());
        });
    }
}
