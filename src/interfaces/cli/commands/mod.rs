mod add;
mod count;
mod list;
mod remove;

pub use add::add_link;
pub use count::count_links;
pub use list::list_links;
pub use remove::remove_link;

use std::path::Path;
use std::sync::Arc;

use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::startup::prepare_store;
use crate::storage::{self, KvStore};

/// 读取存储文件；文件不存在或为空时返回空 store
pub(crate) fn open_store(path: &Path) -> Result<Arc<KvStore>, CliError> {
    prepare_store(path).map_err(|e| {
        CliError::StorageError(format!("Failed to load {}: {}", path.display(), e))
    })
}

pub(crate) fn save_store(store: &KvStore, path: &Path) -> Result<usize, CliError> {
    storage::save(store, path).map_err(|e| {
        CliError::StorageError(format!("Failed to save {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_remove_count_on_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");

        add_link(&path, "http://localhost:8080", "example.com").unwrap();
        add_link(&path, "http://localhost:8080", "https://rust-lang.org").unwrap();
        assert_eq!(open_store(&path).unwrap().count(), 2);

        let key = open_store(&path).unwrap().entries()[0].0.clone();
        remove_link(&path, &key).unwrap();
        let store = open_store(&path).unwrap();
        assert_eq!(store.count(), 1);
        assert!(store.get(&key).is_none());

        assert!(count_links(&path).is_ok());
        assert!(list_links(&path).is_ok());
    }

    #[test]
    fn test_remove_unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        assert!(matches!(
            remove_link(&path, "missing1"),
            Err(CliError::CommandError(_))
        ));
        // 失败的删除不应创建文件
        assert!(!path.exists());
    }

    #[test]
    fn test_add_rejects_invalid_url() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        assert!(add_link(&path, "http://localhost:8080", "javascript:alert(1)").is_err());
        assert!(!path.exists());
    }
}
