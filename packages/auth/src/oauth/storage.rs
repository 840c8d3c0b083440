// ABOUTME: File storage for the Claude credentials document
// ABOUTME: Writes ~/.claude/.credentials.json atomically via a temp file and rename

use std::path::{Path, PathBuf};

use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

use crate::{
    error::{AuthError, AuthResult},
    oauth::types::{Credential, PersistedCredentialFile},
};

const CLAUDE_DIR: &str = ".claude";
const CREDENTIALS_FILE: &str = ".credentials.json";

/// File-based credential storage at `~/.claude/.credentials.json`
#[derive(Debug, Clone)]
pub struct CredentialStorage {
    path: PathBuf,
}

impl CredentialStorage {
    pub fn new() -> AuthResult<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            AuthError::Configuration("Could not determine home directory".to_string())
        })?;
        Ok(Self::in_home(&home))
    }

    /// Storage under an explicit home directory
    pub fn in_home(home: &Path) -> Self {
        Self {
            path: home.join(CLAUDE_DIR).join(CREDENTIALS_FILE),
        }
    }

    /// Create a credential storage at a specific path (useful for testing)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the credentials file with `credential`
    pub async fn save(&self, credential: &Credential) -> AuthResult<()> {
        let document = PersistedCredentialFile::from_credential(credential)?;
        let json = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        // A leftover temp file would keep its old permissions
        let _ = fs::remove_file(&temp_path).await;

        let result = async {
            write_private(&temp_path, json.as_bytes()).await?;
            fs::rename(&temp_path, &self.path).await
        }
        .await;

        if let Err(e) = result {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!("Wrote credentials file {}", self.path.display());
        Ok(())
    }

    /// Read the credentials file, `None` if it does not exist
    pub async fn load(&self) -> AuthResult<Option<PersistedCredentialFile>> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&data)?))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Create `path` readable only by the owner, then write and sync `contents`
async fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;
    file.write_all(contents).await?;
    file.sync_all().await?;
    Ok(())
}
