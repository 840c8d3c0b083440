// ABOUTME: Shared configuration surface for claude-creds
// ABOUTME: Re-exports the environment variable names read by the CLI and auth packages

pub mod constants;

pub use constants::*;
