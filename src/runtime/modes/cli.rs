//! CLI mode
//!
//! This module contains the CLI mode startup logic.
//! It delegates to the actual CLI implementation.

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::interfaces::cli::{CliError, run_cli_command};

/// Run CLI mode
pub fn run_cli(cmd: Commands, config: &AppConfig) -> Result<(), CliError> {
    run_cli_command(cmd, config)
}
