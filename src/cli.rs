//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for shortkeep using clap's derive macros.

use clap::{Parser, Subcommand};

use crate::config::ConfigOverrides;

/// Shortkeep - a small file-backed URL shortener
#[derive(Parser, Debug)]
#[command(name = "shortkeep")]
#[command(version)]
#[command(about = "A small file-backed URL shortener", long_about = None)]
pub struct Cli {
    /// Server listen address (env: SERVER_ADDRESS)
    #[arg(short = 'a', long = "address", global = true)]
    pub server_address: Option<String>,

    /// Base URL used to build short URLs (env: BASE_URL)
    #[arg(short = 'b', long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Path of the JSON storage file (env: FILE_STORAGE_PATH)
    #[arg(short = 'f', long = "file", global = true)]
    pub file_storage_path: Option<String>,

    /// Path of a TOML configuration file
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Log filter directive, e.g. `info` or `shortkeep=debug` (env: LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            server_address: self.server_address.clone(),
            base_url: self.base_url.clone(),
            file_storage_path: self.file_storage_path.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// List all short links in the storage file
    List,

    /// Shorten a URL directly into the storage file
    Add {
        /// Long URL to shorten
        url: String,
    },

    /// Remove a short link from the storage file
    Remove {
        /// Short key to remove
        key: String,
    },

    /// Print the number of stored links
    Count,
}
