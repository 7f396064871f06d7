//! Remove link command

use colored::Colorize;
use std::path::Path;

use super::{open_store, save_store};
use crate::interfaces::cli::CliError;

pub fn remove_link(path: &Path, key: &str) -> Result<(), CliError> {
    let store = open_store(path)?;

    if store.delete(key).is_err() {
        return Err(CliError::CommandError(format!(
            "Short link does not exist: {}",
            key
        )));
    }
    save_store(&store, path)?;

    println!("{} Deleted short link: {}", "✓".bold().green(), key.cyan());
    Ok(())
}
