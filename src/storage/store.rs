//! In-memory key-value store for short key → long URL mappings
//!
//! All fields sit behind a single mutex owned by the store instance. Every
//! operation holds it for its full logical duration, so `count` always
//! matches the map and no caller observes a half-applied mutation.

use parking_lot::{Mutex, MutexGuard};
use std::collections::HashMap;

use crate::errors::{Result, ShortkeepError};

#[derive(Debug, Default)]
pub(crate) struct StoreInner {
    pub(crate) data: HashMap<String, String>,
    pub(crate) count: usize,
}

#[derive(Debug, Default)]
pub struct KvStore {
    inner: Mutex<StoreInner>,
}

impl KvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the long URL stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().data.get(key).cloned()
    }

    /// Insert or overwrite. Only a new key bumps the count.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut inner = self.inner.lock();
        if inner.data.insert(key.into(), value.into()).is_none() {
            inner.count += 1;
        }
    }

    /// Insert only if `key` is free. Returns `false` on collision.
    ///
    /// Check and insert happen under one lock acquisition, so two writers
    /// can never both claim the same key.
    pub fn insert_if_absent(&self, key: &str, value: impl Into<String>) -> bool {
        let mut inner = self.inner.lock();
        if inner.data.contains_key(key) {
            return false;
        }
        inner.data.insert(key.to_string(), value.into());
        inner.count += 1;
        true
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.data.remove(key).is_none() {
            return Err(ShortkeepError::key_not_found(format!(
                "Short key not found: {}",
                key
            )));
        }
        inner.count -= 1;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.inner.lock().count
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Consistent copy of every entry, in unspecified order.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.inner
            .lock()
            .data
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// 持有锁直到 guard 释放，供持久化在整个读写过程中独占
    pub(crate) fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock()
    }
}

impl StoreInner {
    /// 整体替换内容，count 取去重后的条目数
    pub(crate) fn replace_all(&mut self, data: HashMap<String, String>) {
        self.count = data.len();
        self.data = data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_get_missing() {
        let store = KvStore::new();
        assert_eq!(store.get("nope"), None);
        assert_eq!(store.count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_and_overwrite() {
        let store = KvStore::new();
        store.set("abc", "https://a.example");
        assert_eq!(store.count(), 1);

        store.set("abc", "https://b.example");
        assert_eq!(store.count(), 1);
        assert_eq!(store.get("abc").as_deref(), Some("https://b.example"));
    }

    #[test]
    fn test_repeated_get_is_stable() {
        let store = KvStore::new();
        store.set("k", "https://example.com");
        for _ in 0..10 {
            assert_eq!(store.get("k").as_deref(), Some("https://example.com"));
        }
    }

    #[test]
    fn test_delete() {
        let store = KvStore::new();
        store.set("k", "v");
        assert!(store.delete("k").is_ok());
        assert_eq!(store.count(), 0);
        assert!(matches!(
            store.delete("k"),
            Err(ShortkeepError::KeyNotFound(_))
        ));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_insert_if_absent() {
        let store = KvStore::new();
        assert!(store.insert_if_absent("k", "first"));
        assert!(!store.insert_if_absent("k", "second"));
        assert_eq!(store.get("k").as_deref(), Some("first"));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_count_matches_found_keys() {
        let store = KvStore::new();
        let keys: Vec<String> = (0..20).map(|i| format!("key{}", i)).collect();
        for key in &keys {
            store.set(key.as_str(), "v");
        }
        for key in keys.iter().step_by(3) {
            store.delete(key).unwrap();
        }
        store.set("key1", "overwritten");
        let _ = store.delete("missing");

        let found = keys.iter().filter(|k| store.get(k).is_some()).count();
        assert_eq!(store.count(), found);
        assert_eq!(store.entries().len(), found);
    }

    #[test]
    fn test_concurrent_mutations_keep_count_consistent() {
        let store = Arc::new(KvStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..500 {
                        let key = format!("t{}-{}", t, i);
                        store.set(key.as_str(), "v");
                        if i % 2 == 0 {
                            store.delete(&key).unwrap();
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.count(), 8 * 250);
        assert_eq!(store.entries().len(), store.count());
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let a = KvStore::new();
        let b = KvStore::new();
        a.set("k", "v");
        let _guard = a.lock();
        // b has its own lock, so this does not block
        assert_eq!(b.count(), 0);
    }
}
