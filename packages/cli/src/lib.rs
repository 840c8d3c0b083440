// ABOUTME: claude-creds CLI library: configuration, GitHub Actions host sink, setup and status wiring
// ABOUTME: The binary in src/bin stays thin; everything testable lives here

pub mod actions;
pub mod config;
pub mod error;
pub mod setup;
pub mod status;


pub use actions::GithubActionsSink;
pub use config::{Config, ConfigError};
pub use error::CliError;
pub use setup::run_setup;
pub use status::{credential_status, CredentialStatus};

/// Initialize tracing subscriber for structured logging
///
/// Logs go to stderr so stdout only carries workflow commands.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false) // Don't show module paths in logs
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
