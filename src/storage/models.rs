use serde::{Deserialize, Serialize};

/// 持久化文件中的单条记录
///
/// `id` only helps a reader of the file; it is reassigned on every save and
/// carries no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "ShortURL")]
    pub short_key: String,
    #[serde(rename = "OriginalURL")]
    pub long_url: String,
}
