use super::open_store;
use crate::interfaces::cli::CliError;
use std::path::Path;

pub fn count_links(path: &Path) -> Result<(), CliError> {
    println!("{}", open_store(path)?.count());
    Ok(())
}
