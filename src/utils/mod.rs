pub mod url_validator;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// 短码长度（字符数）
pub const SHORT_KEY_LENGTH: usize = 8;

/// 短码最大允许长度，超过直接视为非法路径
const MAX_SHORT_KEY_LENGTH: usize = 64;

/// 6 字节随机数经 base64url 编码后恰好是 8 个字符，无需截断
const SHORT_KEY_BYTES: usize = SHORT_KEY_LENGTH / 4 * 3;

/// Generate a random, URL-safe short key.
///
/// Bytes come from the thread-local CSPRNG, so keys are not predictable.
/// Uniqueness is NOT guaranteed here; the caller checks the store and
/// retries on collision.
pub fn generate_short_key() -> String {
    let bytes: [u8; SHORT_KEY_BYTES] = rand::random();
    URL_SAFE_NO_PAD.encode(bytes)
}

/// 检查短码格式：非空、长度受限、仅包含 base64url 字符（含填充符 `=`）
#[inline]
pub fn is_valid_short_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_SHORT_KEY_LENGTH
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'='))
}
