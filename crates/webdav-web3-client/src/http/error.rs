/*
[INPUT]:  Error sources (wallet, auth handshake, HTTP status, serialization)
[OUTPUT]: Closed set of client error kinds
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Default message when the challenge endpoint rejects without a `message`.
pub const DEFAULT_CHALLENGE_ERROR: &str = "Failed to get challenge";

/// Default message when the verify endpoint rejects without a `message`.
pub const DEFAULT_VERIFY_ERROR: &str = "Verification failed";

/// Main error type for the WebDAV Web3 client
#[derive(Error, Debug)]
pub enum ClientError {
    /// No wallet provider was injected into the client
    #[error("Wallet provider is not available")]
    ProviderUnavailable,

    /// `authenticate` was called before a wallet was connected
    #[error("Wallet not connected")]
    NotConnected,

    /// A file operation was attempted without a bearer token
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Challenge endpoint rejected the request
    #[error("{message}")]
    ChallengeFailed { message: String },

    /// Verify endpoint rejected the signature
    #[error("{message}")]
    VerificationFailed { message: String },

    /// An authenticated request returned a non-success status
    #[error("HTTP {status}: {status_text}")]
    RequestFailed { status: u16, status_text: String },

    /// Wallet provider or signer failure
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Build a `RequestFailed` error from a response status.
    ///
    /// The status text is the canonical reason phrase reported by the transport.
    pub fn request_failed(status: StatusCode) -> Self {
        ClientError::RequestFailed {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Check if error is raised before any network access because of session state
    pub fn is_session_error(&self) -> bool {
        matches!(
            self,
            ClientError::ProviderUnavailable
                | ClientError::NotConnected
                | ClientError::NotAuthenticated
        )
    }

    /// Check if error means the client holds no usable token
    ///
    /// Covers a rejected challenge or verify step and a file operation
    /// attempted before authenticating.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ClientError::ChallengeFailed { .. }
                | ClientError::VerificationFailed { .. }
                | ClientError::NotAuthenticated
        )
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed { status, .. } => Some(*status),
            ClientError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
