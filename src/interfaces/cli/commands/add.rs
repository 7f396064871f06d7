//! Add link command

use colored::Colorize;
use std::path::Path;

use super::{open_store, save_store};
use crate::interfaces::cli::CliError;
use crate::services::LinkService;

pub fn add_link(path: &Path, base_url: &str, url: &str) -> Result<(), CliError> {
    let store = open_store(path)?;
    let service = LinkService::new(store.clone(), base_url);

    let link = service
        .shorten(url)
        .map_err(|e| CliError::CommandError(e.message().to_string()))?;
    save_store(&store, path)?;

    println!(
        "{} Added short link: {} -> {}",
        "✓".bold().green(),
        link.short_url.cyan(),
        link.long_url.blue().underline()
    );
    Ok(())
}
