use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;

use claude_creds_auth::{
    oauth::provider::{DEFAULT_TIMEOUT_SECS, TOKEN_URL},
    AuthResult, AuthorizationServer, CredentialStorage,
};
use claude_creds_config::{CLAUDE_CREDENTIALS_PATH, CLAUDE_OAUTH_TIMEOUT_SECS, CLAUDE_OAUTH_TOKEN_URL};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(#[from] ParseIntError),
    #[error("Timeout must be at least 1 second, got {0}")]
    TimeoutOutOfRange(u64),
    #[error("Invalid token URL {0}: must be an absolute http(s) URL")]
    InvalidTokenUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub token_url: String,
    pub timeout: Duration,
    pub credentials_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let token_url = env::var(CLAUDE_OAUTH_TOKEN_URL)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| TOKEN_URL.to_string());

        match url::Url::parse(&token_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidTokenUrl(token_url)),
        }

        let timeout_secs = env::var(CLAUDE_OAUTH_TIMEOUT_SECS)
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .trim()
            .parse::<u64>()?;

        if timeout_secs == 0 {
            return Err(ConfigError::TimeoutOutOfRange(timeout_secs));
        }

        let credentials_path = env::var_os(CLAUDE_CREDENTIALS_PATH)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Config {
            token_url,
            timeout: Duration::from_secs(timeout_secs),
            credentials_path,
        })
    }

    pub fn authorization_server(&self) -> AuthorizationServer {
        AuthorizationServer::new(self.token_url.clone()).with_timeout(self.timeout)
    }

    /// Explicit path if configured, otherwise `~/.claude/.credentials.json`
    pub fn storage(&self) -> AuthResult<CredentialStorage> {
        match &self.credentials_path {
            Some(path) => Ok(CredentialStorage::with_path(path.clone())),
            None => CredentialStorage::new(),
        }
    }
}
