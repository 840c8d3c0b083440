use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod cli;

use cli::setup::SetupArgs;

#[derive(Parser)]
#[command(name = "claude-creds")]
#[command(about = "Keep Claude OAuth credentials fresh on CI runners")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh the access token if needed and write ~/.claude/.credentials.json
    Setup(SetupArgs),
    /// Show the persisted credentials file and whether its token is still fresh
    Status,
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    claude_creds_cli::init_tracing();

    let cli = Cli::parse();

    match handle_command(cli.command).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

async fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Setup(args) => cli::setup::setup_command(args).await,
        Commands::Status => cli::status::status_command().await,
    }
}
