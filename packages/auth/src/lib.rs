// ABOUTME: claude-creds authentication library keeping Claude OAuth credentials fresh on CI runners
// ABOUTME: Evaluates expiry, refreshes against the authorization server, exports to the host, persists to disk

pub mod error;
pub mod oauth;

// Re-export main types
pub use error::{AuthError, AuthResult, RefreshFailure};
pub use oauth::{
    AuthorizationServer, Credential, CredentialRefresher, CredentialStorage, HostSink, MemorySink,
    PersistedCredentialFile, RefreshOutcome, TokenResponse,
};
