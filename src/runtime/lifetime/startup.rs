use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::errors::{Result, ShortkeepError};
use crate::storage::{self, KvStore};

/// Build the store for this process, populated from `path` when possible.
///
/// A missing or zero-length file is a normal first start and yields an
/// empty store. Any other load failure is returned and should abort
/// startup, since overwriting an unreadable file on shutdown would lose it.
pub fn prepare_store(path: impl AsRef<Path>) -> Result<Arc<KvStore>> {
    let path = path.as_ref();
    let store = KvStore::new();

    match storage::load(&store, path) {
        Ok(count) => {
            debug!("Store ready with {} short links", count);
        }
        Err(ShortkeepError::FileNotFound(_)) => {
            info!(
                "Storage file {} not found, starting with an empty store",
                path.display()
            );
        }
        Err(ShortkeepError::EmptyFile(_)) => {
            warn!(
                "Storage file {} is empty, starting with an empty store",
                path.display()
            );
        }
        Err(e) => {
            error!("Failed to load storage file {}: {}", path.display(), e);
            return Err(e);
        }
    }

    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_and_empty_files_start_empty() {
        let dir = TempDir::new().unwrap();
        let store = prepare_store(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.count(), 0);

        let empty = dir.path().join("empty.json");
        std::fs::write(&empty, "").unwrap();
        let store = prepare_store(&empty).unwrap();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_null_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "null").unwrap();

        let store = prepare_store(&path).unwrap();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_corrupt_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "[{\"ID\": \"oops\"}]").unwrap();
        assert!(matches!(prepare_store(&path), Err(ShortkeepError::Parse(_))));
    }
}
