// ABOUTME: Error types for credential refresh and persistence
// ABOUTME: RefreshFailed is the only distinguished failure; everything else surfaces as a generic invocation error

use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("OAuth token refresh failed: {0}")]
    RefreshFailed(#[from] RefreshFailure),

    #[error("Invalid expiresAt value {0:?}: expected integer Unix seconds")]
    InvalidExpiry(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Host sink error: {0}")]
    Sink(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a refresh exchange with the authorization server did not produce tokens
#[derive(Error, Debug)]
pub enum RefreshFailure {
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("no refresh token available")]
    MissingRefreshToken,
}

impl AuthError {
    /// True when the error came from the refresh exchange
    pub fn is_refresh_failure(&self) -> bool {
        matches!(self, Self::RefreshFailed(_))
    }
}
