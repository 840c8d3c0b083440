// ABOUTME: Credential refresher orchestrating the one-shot refresh flow
// ABOUTME: Expiry check, refresh exchange, host export, then persistence, strictly in that order

use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;
use tracing::{debug, error, info};

use crate::{
    error::{AuthResult, RefreshFailure},
    oauth::{
        provider::{
            AuthorizationServer, OUTPUT_NEW_ACCESS_TOKEN, OUTPUT_NEW_EXPIRES_AT,
            OUTPUT_NEW_REFRESH_TOKEN,
        },
        sink::HostSink,
        storage::CredentialStorage,
        types::{Credential, RefreshTokenRequest, TokenResponse},
    },
};

/// Reason phrase for status codes without a canonical one
const UNKNOWN_STATUS_TEXT: &str = "Unknown Status";

/// Keeps the on-disk Claude credentials fresh for a single invocation
pub struct CredentialRefresher<S> {
    server: AuthorizationServer,
    storage: CredentialStorage,
    sink: S,
    client: Client,
}

/// What `ensure_fresh_credentials` ended up persisting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub credential: Credential,
    pub refreshed: bool,
    pub path: PathBuf,
}

impl<S: HostSink> CredentialRefresher<S> {
    pub fn new(server: AuthorizationServer, storage: CredentialStorage, sink: S) -> AuthResult<Self> {
        let client = server.build_client()?;
        Ok(Self {
            server,
            storage,
            sink,
            client,
        })
    }

    pub fn storage(&self) -> &CredentialStorage {
        &self.storage
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Ensure a valid credentials file exists, refreshing the token first if needed
    pub async fn ensure_fresh_credentials(&self, credential: Credential) -> AuthResult<RefreshOutcome> {
        self.ensure_fresh_credentials_at(credential, Utc::now().timestamp())
            .await
    }

    /// Same as [`ensure_fresh_credentials`](Self::ensure_fresh_credentials) with an explicit clock
    ///
    /// `now` anchors the new expiry, so the computed lifetime never exceeds
    /// what the server granted.
    pub async fn ensure_fresh_credentials_at(
        &self,
        credential: Credential,
        now: i64,
    ) -> AuthResult<RefreshOutcome> {
        let (credential, refreshed) = if credential.needs_refresh(now)? {
            info!("Access token is expired or will expire soon, attempting to refresh");

            let response = self.refresh_access_token(&credential.refresh_token).await?;
            let refreshed = Credential {
                access_token: response.access_token,
                refresh_token: response.refresh_token,
                expires_at: now.saturating_add(response.expires_in).to_string(),
            };
            info!("✅ Successfully refreshed OAuth tokens");

            self.export(&refreshed).await?;
            (refreshed, true)
        } else {
            info!("Access token is still valid");
            (credential, false)
        };

        self.storage.save(&credential).await?;
        info!(
            "OAuth credentials written to {}",
            self.storage.path().display()
        );

        Ok(RefreshOutcome {
            credential,
            refreshed,
            path: self.storage.path().to_path_buf(),
        })
    }

    /// Exchange the refresh token for a new token pair
    async fn refresh_access_token(&self, refresh_token: &str) -> AuthResult<TokenResponse> {
        if refresh_token.trim().is_empty() {
            error!("Token refresh required but no refresh token was provided");
            return Err(RefreshFailure::MissingRefreshToken.into());
        }

        debug!("Posting refresh request to {}", self.server.token_url);
        let response = self
            .client
            .post(&self.server.token_url)
            .json(&RefreshTokenRequest::new(refresh_token))
            .send()
            .await
            .map_err(|e| {
                error!("Token refresh request failed: {}", e);
                RefreshFailure::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            // Don't leak the response body, it may echo credentials
            error!("Token refresh failed with status {}", status);
            return Err(RefreshFailure::Status {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or(UNKNOWN_STATUS_TEXT)
                    .to_string(),
            }
            .into());
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            error!("Failed to parse token response: {}", e);
            RefreshFailure::Transport(e)
        })?;

        Ok(token_response)
    }

    /// Mask the new tokens and publish them as host outputs
    async fn export(&self, credential: &Credential) -> AuthResult<()> {
        self.sink.register_secret(&credential.access_token).await?;
        self.sink.register_secret(&credential.refresh_token).await?;

        self.sink
            .set_output(OUTPUT_NEW_ACCESS_TOKEN, &credential.access_token)
            .await?;
        self.sink
            .set_output(OUTPUT_NEW_REFRESH_TOKEN, &credential.refresh_token)
            .await?;
        self.sink
            .set_output(OUTPUT_NEW_EXPIRES_AT, &credential.expires_at)
            .await?;

        debug!("Exported refreshed tokens to host");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AuthError, oauth::sink::MemorySink};
    use tempfile::TempDir;

    fn refresher(temp_dir: &TempDir) -> CredentialRefresher<MemorySink> {
        // Port 9 (discard) is never contacted by these tests
        CredentialRefresher::new(
            AuthorizationServer::new("http://127.0.0.1:9/token"),
            CredentialStorage::in_home(temp_dir.path()),
            MemorySink::new(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_fresh_credential_is_persisted_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let refresher = refresher(&temp_dir);
        let credential = Credential::new("a1", "r1", "11000");

        let outcome = refresher
            .ensure_fresh_credentials_at(credential.clone(), 1000)
            .await
            .unwrap();

        assert!(!outcome.refreshed);
        assert_eq!(outcome.credential, credential);
        assert!(refresher.sink().is_empty().await);
    }

    #[tokio::test]
    async fn test_invalid_expiry_aborts_before_anything() {
        let temp_dir = TempDir::new().unwrap();
        let refresher = refresher(&temp_dir);

        let err = refresher
            .ensure_fresh_credentials_at(Credential::new("a1", "r1", "next week"), 1000)
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidExpiry(_)));
        assert!(!refresher.storage().path().exists());
    }

    #[tokio::test]
    async fn test_missing_refresh_token_fails_without_network() {
        let temp_dir = TempDir::new().unwrap();
        let refresher = refresher(&temp_dir);

        let err = refresher
            .ensure_fresh_credentials_at(Credential::new("a1", "", "100"), 1000)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthError::RefreshFailed(RefreshFailure::MissingRefreshToken)
        ));
        assert!(refresher.sink().is_empty().await);
        assert!(!refresher.storage().path().exists());
    }
}
