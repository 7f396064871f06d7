use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;
use url::Url;

use super::{AppConfig, ConfigOverrides};
use crate::errors::{Result, ShortkeepError};

/// 未显式指定配置文件时依次查找的路径
const CONFIG_PATHS: &[&str] = &["shortkeep.toml", "config.toml"];

impl AppConfig {
    /// Build the configuration from every layer and validate it.
    ///
    /// `config_path` names an explicit TOML file; when `None` the first
    /// existing entry of [`CONFIG_PATHS`] is used, if any.
    pub fn load(config_path: Option<&str>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = Self::load_from_file(config_path)?;
        config.apply_overrides(overrides);
        config.override_with_env(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, or defaults if none is found
    fn load_from_file(config_path: Option<&str>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::from_toml_file(path);
        }

        for path in CONFIG_PATHS {
            if Path::new(path).exists() {
                return Self::from_toml_file(path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ShortkeepError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config = toml::from_str::<AppConfig>(&content)?;
        debug!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Apply command-line values on top of the current layers
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(address) = non_empty(&overrides.server_address) {
            self.server.address = address;
        }
        if let Some(base_url) = non_empty(&overrides.base_url) {
            self.server.base_url = base_url;
        }
        if let Some(path) = non_empty(&overrides.file_storage_path) {
            self.storage.file_path = path;
        }
        if let Some(level) = non_empty(&overrides.log_level) {
            self.logging.level = level;
        }
    }

    /// Override configuration with environment variables
    ///
    /// Empty values count as unset.
    pub fn override_with_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(address) = get("SERVER_ADDRESS") {
            self.server.address = address;
        }
        if let Some(base_url) = get("BASE_URL") {
            self.server.base_url = base_url;
        }
        if let Some(path) = get("FILE_STORAGE_PATH") {
            self.storage.file_path = path;
        }

        // Logging config
        if let Some(level) = get("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = get("LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(file) = get("LOG_FILE") {
            self.logging.file = Some(file);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.address.trim().is_empty() {
            return Err(ShortkeepError::config("Server address cannot be empty"));
        }
        if self.storage.file_path.trim().is_empty() {
            return Err(ShortkeepError::config("File storage path cannot be empty"));
        }

        let base_url = Url::parse(&self.server.base_url).map_err(|e| {
            ShortkeepError::config(format!(
                "Invalid base URL '{}': {}",
                self.server.base_url, e
            ))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ShortkeepError::config(format!(
                "Base URL must use http or https: {}",
                self.server.base_url
            )));
        }
        if base_url.host_str().is_none_or(str::is_empty) {
            return Err(ShortkeepError::config(format!(
                "Base URL has no host: {}",
                self.server.base_url
            )));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ShortkeepError::config(format!(
                "Unknown log format '{}', expected 'text' or 'json'",
                self.logging.format
            )));
        }

        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
