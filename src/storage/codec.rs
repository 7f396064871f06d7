//! JSON persistence for [`KvStore`]
//!
//! The on-disk format is a JSON array of
//! `{"ID": int, "ShortURL": string, "OriginalURL": string}` objects.
//! Record order carries no meaning. A file holding `null` decodes as an
//! empty snapshot.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use super::models::PersistedRecord;
use super::store::KvStore;
use crate::errors::{Result, ShortkeepError};

/// Decoded content of a storage file.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    records: Vec<PersistedRecord>,
}

impl Snapshot {
    pub fn records(&self) -> &[PersistedRecord] {
        &self.records
    }

    /// Key → URL pairs. Later records win when a key repeats.
    pub fn entries(&self) -> HashMap<String, String> {
        self.records
            .iter()
            .map(|r| (r.short_key.clone(), r.long_url.clone()))
            .collect()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.short_key.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest persisted `ID`, 0 for an empty snapshot.
    ///
    /// Only informational: the store count after a load is the number of
    /// distinct keys, never this value.
    pub fn max_id(&self) -> u64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0)
    }

    fn into_entries(self) -> HashMap<String, String> {
        self.records
            .into_iter()
            .map(|r| (r.short_key, r.long_url))
            .collect()
    }
}

/// Write every entry of `store` to `path` as JSON.
///
/// The store lock is held until the file is written, so the snapshot cannot
/// change mid-write. Missing parent directories are created.
pub fn save(store: &KvStore, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let inner = store.lock();

    let records: Vec<PersistedRecord> = inner
        .data
        .iter()
        .enumerate()
        .map(|(i, (short_key, long_url))| PersistedRecord {
            id: i as u64 + 1,
            short_key: short_key.clone(),
            long_url: long_url.clone(),
        })
        .collect();

    let json = serde_json::to_vec_pretty(&records).map_err(|e| {
        ShortkeepError::serialization(format!("Failed to encode storage records: {}", e))
    })?;

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|e| {
            ShortkeepError::file_operation(format!(
                "Failed to create directory {}: {}",
                dir.display(),
                e
            ))
        })?;
    }

    fs::write(path, json).map_err(|e| {
        ShortkeepError::file_operation(format!("Failed to write {}: {}", path.display(), e))
    })?;

    debug!("Saved {} records to {}", records.len(), path.display());
    Ok(records.len())
}

/// Read and decode a storage file without touching any store.
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Snapshot> {
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ShortkeepError::file_not_found(format!(
                "Storage file does not exist: {}",
                path.display()
            )));
        }
        Err(e) => {
            return Err(ShortkeepError::file_operation(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )));
        }
    };

    if bytes.is_empty() {
        return Err(ShortkeepError::empty_file(format!(
            "Storage file is empty: {}",
            path.display()
        )));
    }

    // 空 store 也可能被写成 `null`
    let records: Option<Vec<PersistedRecord>> = serde_json::from_slice(&bytes).map_err(|e| {
        ShortkeepError::parse(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    Ok(Snapshot {
        records: records.unwrap_or_default(),
    })
}

/// Replace the contents of `store` with the file at `path`.
///
/// Runs under the store lock. On any error the store is left as it was.
/// Returns the resulting entry count.
pub fn load(store: &KvStore, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let mut inner = store.lock();

    let snapshot = read_snapshot(path)?;
    let max_id = snapshot.max_id();
    inner.replace_all(snapshot.into_entries());

    info!(
        "Loaded {} short links from {} (max persisted id {})",
        inner.count,
        path.display(),
        max_id
    );
    Ok(inner.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_snapshot(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ShortkeepError::FileNotFound(_)));
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.json", "");
        assert!(matches!(
            read_snapshot(&path),
            Err(ShortkeepError::EmptyFile(_))
        ));
    }

    #[test]
    fn test_null_file_is_empty_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "null.json", "null\n");
        let snapshot = read_snapshot(&path).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);

        let store = KvStore::new();
        store.set("stale", "https://stale.example");
        assert_eq!(load(&store, &path).unwrap(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_distinct_key_count() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "dup.json",
            r#"[
                {"ID": 1, "ShortURL": "a", "OriginalURL": "https://one.example"},
                {"ID": 2, "ShortURL": "b", "OriginalURL": "https://two.example"},
                {"ID": 3, "ShortURL": "a", "OriginalURL": "https://three.example"}
            ]"#,
        );
        let snapshot = read_snapshot(&path).unwrap();
        assert_eq!(snapshot.records().len(), 3);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.entries().len(), 2);
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let bad_json = write(&dir, "bad.json", "{not json");
        assert!(matches!(read_snapshot(&bad_json), Err(ShortkeepError::Parse(_))));

        let wrong_schema = write(&dir, "schema.json", r#"[{"ID": 1, "ShortURL": 5}]"#);
        assert!(matches!(
            read_snapshot(&wrong_schema),
            Err(ShortkeepError::Parse(_))
        ));
    }

    #[test]
    fn test_failed_load_leaves_store_untouched() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.json", "[");
        let store = KvStore::new();
        store.set("keep", "https://example.com");

        assert!(load(&store, &path).is_err());
        assert_eq!(store.count(), 1);
        assert_eq!(store.get("keep").as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_load_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "db.json",
            r#"[{"ID": 1, "ShortURL": "aaaaaaaa", "OriginalURL": "https://a.example"}]"#,
        );
        let store = KvStore::new();
        store.set("stale", "https://stale.example");

        assert_eq!(load(&store, &path).unwrap(), 1);
        assert_eq!(store.get("stale"), None);
        assert_eq!(store.get("aaaaaaaa").as_deref(), Some("https://a.example"));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("db.json");
        let store = KvStore::new();
        store.set("k", "https://example.com");

        assert_eq!(save(&store, &path).unwrap(), 1);
        assert!(path.exists());
    }

    #[test]
    fn test_saved_file_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let store = KvStore::new();
        store.set("abcdefgh", "https://example.com");
        save(&store, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "ID": 1,
                "ShortURL": "abcdefgh",
                "OriginalURL": "https://example.com"
            }])
        );
    }

    #[test]
    fn test_ids_are_sequential() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let store = KvStore::new();
        for i in 0..5 {
            store.set(format!("k{}", i), "https://example.com");
        }
        save(&store, &path).unwrap();

        let mut ids: Vec<u64> = read_snapshot(&path)
            .unwrap()
            .records()
            .iter()
            .map(|r| r.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
