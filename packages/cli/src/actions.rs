// ABOUTME: GitHub Actions host sink using workflow commands and the GITHUB_OUTPUT file
// ABOUTME: Masks refreshed tokens in runner logs and publishes them as step outputs

use std::env;
use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use claude_creds_auth::{AuthError, AuthResult, HostSink};
use claude_creds_config::GITHUB_OUTPUT;
use tokio::{fs::OpenOptions, io::AsyncWriteExt, sync::Mutex};
use tracing::debug;

/// Host sink for GitHub Actions runners
///
/// Masks go to stdout as `::add-mask::` commands. Outputs are appended to the
/// file named by `GITHUB_OUTPUT`, or emitted as legacy `::set-output::`
/// commands when that variable is unset.
pub struct GithubActionsSink {
    output_file: Option<PathBuf>,
    commands: Mutex<Box<dyn Write + Send>>,
}

impl GithubActionsSink {
    pub fn new(output_file: Option<PathBuf>, commands: Box<dyn Write + Send>) -> Self {
        Self {
            output_file,
            commands: Mutex::new(commands),
        }
    }

    pub fn from_env() -> Self {
        let output_file = env::var_os(GITHUB_OUTPUT)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::new(output_file, Box::new(std::io::stdout()))
    }

    async fn issue_command(&self, line: String) -> AuthResult<()> {
        let mut commands = self.commands.lock().await;
        writeln!(commands, "{}", line)
            .and_then(|_| commands.flush())
            .map_err(|e| AuthError::Sink(format!("Failed to write workflow command: {}", e)))
    }
}

#[async_trait]
impl HostSink for GithubActionsSink {
    async fn register_secret(&self, value: &str) -> AuthResult<()> {
        if value.is_empty() {
            return Ok(());
        }
        self.issue_command(format!("::add-mask::{}", escape_data(value)))
            .await
    }

    async fn set_output(&self, key: &str, value: &str) -> AuthResult<()> {
        let Some(path) = &self.output_file else {
            return self
                .issue_command(format!(
                    "::set-output name={}::{}",
                    escape_property(key),
                    escape_data(value)
                ))
                .await;
        };

        let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
        let block = key_value_block(key, value, &delimiter)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|e| AuthError::Sink(format!("Failed to open {}: {}", path.display(), e)))?;
        file.write_all(block.as_bytes())
            .await
            .map_err(|e| AuthError::Sink(format!("Failed to write {}: {}", path.display(), e)))?;

        debug!("Set output {}", key);
        Ok(())
    }
}

/// Heredoc-style entry for the `GITHUB_OUTPUT` file
pub(crate) fn key_value_block(key: &str, value: &str, delimiter: &str) -> AuthResult<String> {
    if key.contains(delimiter) {
        return Err(AuthError::Sink(format!(
            "Output name must not contain the delimiter {}",
            delimiter
        )));
    }
    if value.contains(delimiter) {
        return Err(AuthError::Sink(format!(
            "Output value for {} must not contain the delimiter",
            key
        )));
    }
    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"))
}

pub(crate) fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub(crate) fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
