// ABOUTME: `claude-creds status` command
// ABOUTME: Prints the persisted credentials file location and expiry

use chrono::{DateTime, Utc};
use claude_creds_cli::{credential_status, Config, CredentialStatus};
use colored::*;

pub async fn status_command() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let storage = config.storage()?;

    println!("{}", "🔐 Claude OAuth credentials".bold().cyan());

    match credential_status(&storage, Utc::now().timestamp()).await? {
        CredentialStatus::Missing { path } => {
            println!("  Path: {}", path.display());
            println!("  {} No credentials file", "✗".red().bold());
        }
        CredentialStatus::Present {
            path,
            expires_at,
            needs_refresh,
            scopes,
        } => {
            let expiry = DateTime::<Utc>::from_timestamp(expires_at, 0)
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| expires_at.to_string());

            println!("  Path: {}", path.display());
            if needs_refresh {
                println!("  {} Expires {} (refresh needed)", "⚠".yellow().bold(), expiry);
            } else {
                println!("  {} Expires {}", "✓".green().bold(), expiry);
            }
            println!("  Scopes: {}", scopes.join(", "));
        }
    }

    Ok(())
}
