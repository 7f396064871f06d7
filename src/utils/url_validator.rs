//! URL 验证模块
//!
//! Normalizes user-supplied long URLs (prefixing `http://` when the scheme
//! is missing) and rejects anything that is not a well-formed http(s) URL.

use url::Url;

/// URL 验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidProtocol(String),
    DangerousProtocol(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidProtocol(proto) => write!(
                f,
                "Invalid protocol: {}. Only http:// and https:// are allowed",
                proto
            ),
            Self::DangerousProtocol(proto) => {
                write!(f, "Dangerous protocol blocked: {}", proto)
            }
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 危险协议列表
const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// Prefix `http://` unless the URL already starts with `http://` or `https://`.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

/// Returns the explicit scheme of `url`, if it has one.
///
/// `example.com:8080` is a host with a port and `user:pass@example.com`
/// carries userinfo; neither colon starts a scheme.
fn explicit_scheme(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once(':')?;

    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let scheme_chars = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    let port_follows = rest.starts_with(|c: char| c.is_ascii_digit());
    let userinfo = rest
        .split(['/', '?', '#'])
        .next()
        .is_some_and(|authority| authority.contains('@'));

    (starts_alpha && scheme_chars && !port_follows && !userinfo).then_some(scheme)
}

/// Check that an already-normalized URL is syntactically valid and has a host.
pub fn check_url_syntax(url: &str) -> Result<(), UrlValidationError> {
    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::InvalidFormat("missing host".to_string())),
    }
}

/// 验证并规范化 URL
///
/// 检查项目：
/// 1. URL 不为空
/// 2. 不是危险协议（javascript:, data:, file: 等）
/// 3. 显式协议只能是 http 或 https，缺省时补全 http://
/// 4. URL 格式有效
///
/// Returns the normalized URL that should be stored.
pub fn validate_url(url: &str) -> Result<String, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let url_lower = url.to_ascii_lowercase();

    // 检查危险协议
    for proto in DANGEROUS_PROTOCOLS {
        if url_lower.starts_with(proto) {
            return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
        }
    }

    if let Some(scheme) = explicit_scheme(&url_lower)
        && scheme != "http"
        && scheme != "https"
    {
        return Err(UrlValidationError::InvalidProtocol(format!("{}:", scheme)));
    }

    let normalized = normalize_url(url);
    check_url_syntax(&normalized)?;

    Ok(normalized)
}
