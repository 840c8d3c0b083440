// ABOUTME: OAuth module for the non-interactive credential refresh flow
// ABOUTME: Includes credential types, authorization server settings, host sink, file storage, and the refresher

pub mod provider;
pub mod refresher;
pub mod sink;
pub mod storage;
pub mod types;

pub use provider::AuthorizationServer;
pub use refresher::{CredentialRefresher, RefreshOutcome};
pub use sink::{HostSink, MemorySink};
pub use storage::CredentialStorage;
pub use types::{ClaudeAiOauth, Credential, PersistedCredentialFile, RefreshTokenRequest, TokenResponse};
