// ABOUTME: Inspection of the persisted credentials file for `claude-creds status`
// ABOUTME: Reports location, expiry and freshness without touching the network or printing tokens

use std::path::PathBuf;

use claude_creds_auth::{AuthResult, CredentialStorage};

/// What the credentials file currently says about the token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    Missing {
        path: PathBuf,
    },
    Present {
        path: PathBuf,
        expires_at: i64,
        needs_refresh: bool,
        scopes: Vec<String>,
    },
}

/// Read `storage` and evaluate its token against `now`
pub async fn credential_status(storage: &CredentialStorage, now: i64) -> AuthResult<CredentialStatus> {
    let path = storage.path().to_path_buf();

    let Some(document) = storage.load().await? else {
        return Ok(CredentialStatus::Missing { path });
    };

    let needs_refresh = document.to_credential().needs_refresh(now)?;
    Ok(CredentialStatus::Present {
        path,
        expires_at: document.claude_ai_oauth.expires_at,
        needs_refresh,
        scopes: document.claude_ai_oauth.scopes,
    })
}
