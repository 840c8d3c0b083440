// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across claude-creds

// Credential inputs
pub const CLAUDE_ACCESS_TOKEN: &str = "CLAUDE_ACCESS_TOKEN";
pub const CLAUDE_REFRESH_TOKEN: &str = "CLAUDE_REFRESH_TOKEN";
pub const CLAUDE_EXPIRES_AT: &str = "CLAUDE_EXPIRES_AT";

// Authorization server
pub const CLAUDE_OAUTH_TOKEN_URL: &str = "CLAUDE_OAUTH_TOKEN_URL";
pub const CLAUDE_OAUTH_TIMEOUT_SECS: &str = "CLAUDE_OAUTH_TIMEOUT_SECS";

// Credential file location (defaults to ~/.claude/.credentials.json)
pub const CLAUDE_CREDENTIALS_PATH: &str = "CLAUDE_CREDENTIALS_PATH";

// GitHub Actions host environment
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";
