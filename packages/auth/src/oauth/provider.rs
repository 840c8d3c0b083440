// ABOUTME: Claude authorization server settings and fixed OAuth constants
// ABOUTME: Token endpoint, request timeout, persisted scopes, refresh buffer, and host output keys

use std::time::Duration;

use reqwest::Client;

use crate::error::{AuthError, AuthResult};

/// Refresh endpoint of the Claude authorization server
pub const TOKEN_URL: &str = "https://claude.ai/api/oauth/token";

/// Scopes written to the credentials file. Not negotiated with the server.
pub const SCOPES: [&str; 2] = ["user:inference", "user:profile"];

/// Tokens expiring within this many seconds are refreshed early
pub const REFRESH_BUFFER_SECONDS: i64 = 5 * 60;

/// Default bound on the refresh request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Host output keys
pub const OUTPUT_NEW_ACCESS_TOKEN: &str = "new_access_token";
pub const OUTPUT_NEW_REFRESH_TOKEN: &str = "new_refresh_token";
pub const OUTPUT_NEW_EXPIRES_AT: &str = "new_expires_at";

/// Where and how long to talk to the authorization server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationServer {
    pub token_url: String,
    pub timeout: Duration,
}

impl AuthorizationServer {
    pub fn new(token_url: impl Into<String>) -> Self {
        Self {
            token_url: token_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the HTTP client used for the refresh exchange
    pub fn build_client(&self) -> AuthResult<Client> {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| AuthError::Configuration(format!("Failed to build HTTP client: {}", e)))
    }
}

impl Default for AuthorizationServer {
    fn default() -> Self {
        Self::new(TOKEN_URL)
    }
}
