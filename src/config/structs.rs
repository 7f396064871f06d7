use serde::{Deserialize, Serialize};

/// 默认监听地址
pub const DEFAULT_SERVER_ADDRESS: &str = "localhost:8080";

/// 默认存储文件路径
pub const DEFAULT_FILE_STORAGE_PATH: &str = "data/db.json";

/// 应用配置
///
/// 优先级：ENV > 命令行参数 > TOML 文件 > 默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address, `host:port`
    pub address: String,
    /// Externally visible base URL used to build short URLs
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_SERVER_ADDRESS.to_string(),
            base_url: format!("http://{}", DEFAULT_SERVER_ADDRESS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub file_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_path: DEFAULT_FILE_STORAGE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `shortkeep=debug`
    pub level: String,
    /// `text` or `json`
    pub format: String,
    /// Append logs to this file instead of stdout
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            file: None,
        }
    }
}

/// Values supplied on the command line. `None` keeps the lower layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub server_address: Option<String>,
    pub base_url: Option<String>,
    pub file_storage_path: Option<String>,
    pub log_level: Option<String>,
}
