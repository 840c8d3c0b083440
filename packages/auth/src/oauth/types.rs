// ABOUTME: Core type definitions for Claude OAuth credentials
// ABOUTME: Input credential triple, refresh wire types, and the persisted credentials file shape

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{AuthError, AuthResult},
    oauth::provider::{REFRESH_BUFFER_SECONDS, SCOPES},
};

/// Credential triple supplied by the caller.
///
/// `expires_at` stays a string here because that is how callers pass it;
/// the persisted form stores it as a number.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: String,
}

impl Credential {
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_at: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_at: expires_at.into(),
        }
    }

    /// Absolute expiry in Unix seconds
    pub fn expires_at_secs(&self) -> AuthResult<i64> {
        self.expires_at
            .trim()
            .parse::<i64>()
            .map_err(|_| AuthError::InvalidExpiry(self.expires_at.clone()))
    }

    /// Check if token is expired or expires within the 5-minute buffer
    pub fn needs_refresh(&self, now: i64) -> AuthResult<bool> {
        let expires_at = self.expires_at_secs()?;
        Ok(expires_at <= now.saturating_add(REFRESH_BUFFER_SECONDS))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// OAuth refresh token request
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub grant_type: String, // "refresh_token"
    pub refresh_token: String,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: &str) -> Self {
        Self {
            grant_type: "refresh_token".to_string(),
            refresh_token: refresh_token.to_string(),
        }
    }
}

/// OAuth token response from the authorization server
#[derive(Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64, // Seconds
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Contents of `~/.claude/.credentials.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedCredentialFile {
    pub claude_ai_oauth: ClaudeAiOauth,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeAiOauth {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
    pub scopes: Vec<String>,
}

impl fmt::Debug for ClaudeAiOauth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaudeAiOauth")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .field("scopes", &self.scopes)
            .finish()
    }
}

impl PersistedCredentialFile {
    pub fn from_credential(credential: &Credential) -> AuthResult<Self> {
        Ok(Self {
            claude_ai_oauth: ClaudeAiOauth {
                access_token: credential.access_token.clone(),
                refresh_token: credential.refresh_token.clone(),
                expires_at: credential.expires_at_secs()?,
                scopes: SCOPES.iter().map(|s| s.to_string()).collect(),
            },
        })
    }

    pub fn to_credential(&self) -> Credential {
        Credential {
            access_token: self.claude_ai_oauth.access_token.clone(),
            refresh_token: self.claude_ai_oauth.refresh_token.clone(),
            expires_at: self.claude_ai_oauth.expires_at.to_string(),
        }
    }
}
