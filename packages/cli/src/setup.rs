// ABOUTME: Wiring between CLI configuration and the credential refresher
// ABOUTME: Builds the refresher from Config and runs the one-shot refresh-and-persist flow

use claude_creds_auth::{Credential, CredentialRefresher, HostSink, RefreshOutcome};
use tracing::info;

use crate::{config::Config, error::CliError};

/// Refresh `credential` if needed and write the credentials file
pub async fn run_setup<S: HostSink>(
    config: &Config,
    credential: Credential,
    sink: S,
) -> Result<RefreshOutcome, CliError> {
    let refresher =
        CredentialRefresher::new(config.authorization_server(), config.storage()?, sink)?;

    info!("Setting up Claude OAuth credentials");
    let outcome = refresher.ensure_fresh_credentials(credential).await?;
    Ok(outcome)
}
