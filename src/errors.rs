//! Error types for the Kudu client
//!
//! Two failure channels exist when talking to the site API: transport
//! failures from the HTTP stack, and rejected credentials that the API
//! reports as a 200-status HTML error page instead of a proper 401.

use std::fmt;

/// Main error type for client operations
#[derive(Debug)]
pub enum ClientError {
    /// Transport-level failure (DNS, connection, TLS, timeout)
    Transport { url: String, reason: String },

    /// The site rejected the configured username or password
    InvalidCredentials { url: String },

    /// Local source file for an upload is missing or unreadable
    SourceFile { path: String, reason: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport { url, reason } => {
                write!(f, "Request to {} failed: {}", url, reason)
            }
            ClientError::InvalidCredentials { url } => {
                write!(
                    f,
                    "Invalid credentials: {} rejected the given username or password",
                    url
                )
            }
            ClientError::SourceFile { path, reason } => {
                write!(
                    f,
                    "The file '{}' does not exist or cannot be read: {}",
                    path, reason
                )
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl ClientError {
    /// Build a transport error from a failed reqwest call
    pub(crate) fn transport(url: &str, err: &reqwest::Error) -> Self {
        ClientError::Transport {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}
