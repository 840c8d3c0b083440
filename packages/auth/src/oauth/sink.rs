// ABOUTME: Host sink abstraction for the surrounding automation system
// ABOUTME: Secret-masking registrations and named outputs, plus an in-memory recorder

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::AuthResult;

/// Secret masking and output reporting offered by the host (e.g. a CI runner)
#[async_trait]
pub trait HostSink: Send + Sync {
    /// Register a value that must never appear in plaintext host logs
    async fn register_secret(&self, value: &str) -> AuthResult<()>;

    /// Publish a named output for later workflow steps
    async fn set_output(&self, key: &str, value: &str) -> AuthResult<()>;
}

#[async_trait]
impl<S: HostSink + ?Sized> HostSink for std::sync::Arc<S> {
    async fn register_secret(&self, value: &str) -> AuthResult<()> {
        (**self).register_secret(value).await
    }

    async fn set_output(&self, key: &str, value: &str) -> AuthResult<()> {
        (**self).set_output(key, value).await
    }
}

/// Host sink that records every call in order
#[derive(Debug, Default)]
pub struct MemorySink {
    secrets: Mutex<Vec<String>>,
    outputs: Mutex<Vec<(String, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn secrets(&self) -> Vec<String> {
        self.secrets.lock().await.clone()
    }

    pub async fn outputs(&self) -> Vec<(String, String)> {
        self.outputs.lock().await.clone()
    }

    /// Last value published under `key`
    pub async fn output(&self, key: &str) -> Option<String> {
        self.outputs
            .lock()
            .await
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    pub async fn is_empty(&self) -> bool {
        self.secrets.lock().await.is_empty() && self.outputs.lock().await.is_empty()
    }
}

#[async_trait]
impl HostSink for MemorySink {
    async fn register_secret(&self, value: &str) -> AuthResult<()> {
        self.secrets.lock().await.push(value.to_string());
        Ok(())
    }

    async fn set_output(&self, key: &str, value: &str) -> AuthResult<()> {
        self.outputs
            .lock()
            .await
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}
