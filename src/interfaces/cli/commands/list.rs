//! List links command

use colored::Colorize;
use std::path::Path;

use super::open_store;
use crate::interfaces::cli::CliError;

pub fn list_links(path: &Path) -> Result<(), CliError> {
    let store = open_store(path)?;
    let mut links = store.entries();
    links.sort();

    if links.is_empty() {
        println!("{} No short links found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Short link list:".bold().green());
    println!();
    for (key, long_url) in &links {
        println!("  {} -> {}", key.cyan(), long_url.blue().underline());
    }
    println!();
    println!(
        "{} Total {} short links",
        "ℹ".bold().blue(),
        links.len().to_string().green()
    );
    Ok(())
}
