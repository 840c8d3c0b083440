// ABOUTME: `claude-creds setup` command
// ABOUTME: Reads the credential triple from flags or environment and runs the refresh flow

use clap::Args;
use claude_creds_auth::Credential;
use claude_creds_cli::{run_setup, Config, GithubActionsSink};
use claude_creds_config::{CLAUDE_ACCESS_TOKEN, CLAUDE_EXPIRES_AT, CLAUDE_REFRESH_TOKEN};
use colored::*;

#[derive(Args)]
pub struct SetupArgs {
    /// Current OAuth access token
    #[arg(long, env = CLAUDE_ACCESS_TOKEN, hide_env_values = true)]
    access_token: String,

    /// Current OAuth refresh token
    #[arg(long, env = CLAUDE_REFRESH_TOKEN, hide_env_values = true)]
    refresh_token: String,

    /// Access token expiry as Unix seconds
    #[arg(long, env = CLAUDE_EXPIRES_AT)]
    expires_at: String,
}

pub async fn setup_command(args: SetupArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let credential = Credential::new(args.access_token, args.refresh_token, args.expires_at);

    let outcome = run_setup(&config, credential, GithubActionsSink::from_env()).await?;

    let status = if outcome.refreshed {
        "refreshed".yellow().bold()
    } else {
        "still valid".green().bold()
    };
    eprintln!(
        "{} Access token {}, credentials written to {}",
        "✓".green().bold(),
        status,
        outcome.path.display()
    );
    Ok(())
}
