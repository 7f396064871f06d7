//! Link management service
//!
//! Provides the shorten/expand logic shared between the HTTP handlers and
//! the CLI commands.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::{Result, ShortkeepError};
use crate::storage::KvStore;
use crate::utils::generate_short_key;
use crate::utils::url_validator::{check_url_syntax, normalize_url, validate_url};

/// 生成短码时的最大尝试次数，超过即判定键空间耗尽
pub const MAX_GENERATION_ATTEMPTS: usize = 16;

/// Result of a successful shorten call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    /// The generated short key
    pub key: String,
    /// Full short URL (`base_url/key`)
    pub short_url: String,
    /// Normalized long URL as stored
    pub long_url: String,
}

pub struct LinkService {
    store: Arc<KvStore>,
    base_url: String,
    generate_key: fn() -> String,
}

impl LinkService {
    pub fn new(store: Arc<KvStore>, base_url: impl Into<String>) -> Self {
        Self::with_key_generator(store, base_url, generate_short_key)
    }

    /// Same as [`LinkService::new`] but with a custom key source.
    pub fn with_key_generator(
        store: Arc<KvStore>,
        base_url: impl Into<String>,
        generate_key: fn() -> String,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            store,
            base_url,
            generate_key,
        }
    }

    pub fn store(&self) -> &Arc<KvStore> {
        &self.store
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Full short URL for `key`.
    pub fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    /// Validate `raw`, allocate a fresh key for it and store the mapping.
    pub fn shorten(&self, raw: &str) -> Result<ShortenedLink> {
        let long_url =
            validate_url(raw).map_err(|e| ShortkeepError::invalid_input(e.to_string()))?;

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let key = (self.generate_key)();
            if self.store.insert_if_absent(&key, long_url.as_str()) {
                info!("LinkService: created link '{}' -> '{}'", key, long_url);
                return Ok(ShortenedLink {
                    short_url: self.short_url(&key),
                    key,
                    long_url,
                });
            }
            debug!("Short key collision on attempt {}: {}", attempt, key);
        }

        warn!(
            "Gave up generating a short key after {} attempts",
            MAX_GENERATION_ATTEMPTS
        );
        Err(ShortkeepError::generation_exhausted(format!(
            "No free short key found after {} attempts",
            MAX_GENERATION_ATTEMPTS
        )))
    }

    /// Resolve `key` to the URL a client should be redirected to.
    pub fn expand(&self, key: &str) -> Result<String> {
        if key.is_empty() {
            return Err(ShortkeepError::invalid_input("ID is required"));
        }

        let stored = self
            .store
            .get(key)
            .ok_or_else(|| ShortkeepError::not_found("URL not found"))?;

        let target = normalize_url(&stored);
        check_url_syntax(&target).map_err(|e| {
            ShortkeepError::internal_inconsistency(format!(
                "Stored value for '{}' is not a valid URL: {}",
                key, e
            ))
        })?;

        Ok(target)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.store.delete(key)?;
        info!("LinkService: removed link '{}'", key);
        Ok(())
    }
}
