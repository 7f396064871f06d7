//! CLI interface module
//!
//! Offline link management directly on the JSON storage file. The server
//! must not be running against the same file, otherwise its shutdown save
//! overwrites whatever these commands wrote.

pub mod commands;

use std::fmt;
use std::path::PathBuf;

use crate::cli::Commands;
use crate::config::AppConfig;
use commands::{add_link, count_links, list_links, remove_link};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::ShortkeepError> for CliError {
    fn from(err: crate::errors::ShortkeepError) -> Self {
        CliError::StorageError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &AppConfig) -> Result<(), CliError> {
    let path = PathBuf::from(&config.storage.file_path);

    match cmd {
        Commands::List => list_links(&path),
        Commands::Add { url } => add_link(&path, &config.server.base_url, &url),
        Commands::Remove { key } => remove_link(&path, &key),
        Commands::Count => count_links(&path),
        Commands::Serve => Err(CliError::CommandError(
            "serve is not a storage command".to_string(),
        )),
    }
}
