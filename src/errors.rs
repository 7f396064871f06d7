use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

#[derive(Debug, Clone)]
pub enum ShortkeepError {
    InvalidInput(String),
    NotFound(String),
    KeyNotFound(String),
    InternalInconsistency(String),
    GenerationExhausted(String),
    FileNotFound(String),
    EmptyFile(String),
    Parse(String),
    Serialization(String),
    FileOperation(String),
    Config(String),
}

impl ShortkeepError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortkeepError::InvalidInput(_) => "E001",
            ShortkeepError::NotFound(_) => "E002",
            ShortkeepError::KeyNotFound(_) => "E003",
            ShortkeepError::InternalInconsistency(_) => "E004",
            ShortkeepError::GenerationExhausted(_) => "E005",
            ShortkeepError::FileNotFound(_) => "E006",
            ShortkeepError::EmptyFile(_) => "E007",
            ShortkeepError::Parse(_) => "E008",
            ShortkeepError::Serialization(_) => "E009",
            ShortkeepError::FileOperation(_) => "E010",
            ShortkeepError::Config(_) => "E011",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortkeepError::InvalidInput(_) => "Invalid Input",
            ShortkeepError::NotFound(_) => "Resource Not Found",
            ShortkeepError::KeyNotFound(_) => "Key Not Found",
            ShortkeepError::InternalInconsistency(_) => "Internal Inconsistency",
            ShortkeepError::GenerationExhausted(_) => "Key Generation Exhausted",
            ShortkeepError::FileNotFound(_) => "File Not Found",
            ShortkeepError::EmptyFile(_) => "Empty File",
            ShortkeepError::Parse(_) => "Parse Error",
            ShortkeepError::Serialization(_) => "Serialization Error",
            ShortkeepError::FileOperation(_) => "File Operation Error",
            ShortkeepError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortkeepError::InvalidInput(msg)
            | ShortkeepError::NotFound(msg)
            | ShortkeepError::KeyNotFound(msg)
            | ShortkeepError::InternalInconsistency(msg)
            | ShortkeepError::GenerationExhausted(msg)
            | ShortkeepError::FileNotFound(msg)
            | ShortkeepError::EmptyFile(msg)
            | ShortkeepError::Parse(msg)
            | ShortkeepError::Serialization(msg)
            | ShortkeepError::FileOperation(msg)
            | ShortkeepError::Config(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortkeepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortkeepError {}

// 便捷的构造函数
impl ShortkeepError {
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        ShortkeepError::InvalidInput(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortkeepError::NotFound(msg.into())
    }

    pub fn key_not_found<T: Into<String>>(msg: T) -> Self {
        ShortkeepError::KeyNotFound(msg.into())
    }

    pub fn internal_inconsistency<T: Into<String>>(msg: T) -> Self {
        ShortkeepError::InternalInconsistency(msg.into())
    }

    pub fn generation_exhausted<T: Into<String>>(msg: T) -> Self {
        ShortkeepError::GenerationExhausted(msg.into())
    }

    pub fn file_not_found<T: Into<String>>(msg: T) -> Self {
        ShortkeepError::FileNotFound(msg.into())
    }

    pub fn empty_file<T: Into<String>>(msg: T) -> Self {
        ShortkeepError::EmptyFile(msg.into())
    }

    pub fn parse<T: Into<String>>(msg: T) -> Self {
        ShortkeepError::Parse(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortkeepError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortkeepError::FileOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortkeepError::Config(msg.into())
    }
}

impl From<std::io::Error> for ShortkeepError {
    fn from(err: std::io::Error) -> Self {
        ShortkeepError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ShortkeepError {
    fn from(err: serde_json::Error) -> Self {
        ShortkeepError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ShortkeepError {
    fn from(err: toml::de::Error) -> Self {
        ShortkeepError::Config(err.to_string())
    }
}

impl From<url::ParseError> for ShortkeepError {
    fn from(err: url::ParseError) -> Self {
        ShortkeepError::InvalidInput(err.to_string())
    }
}

impl ResponseError for ShortkeepError {
    fn status_code(&self) -> StatusCode {
        match self {
            ShortkeepError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ShortkeepError::NotFound(_) | ShortkeepError::KeyNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // 服务端错误不向客户端暴露内部细节
        let body = match self.status_code() {
            StatusCode::INTERNAL_SERVER_ERROR => "Internal Server Error".to_string(),
            _ => self.message().to_string(),
        };

        HttpResponse::build(self.status_code())
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .body(body)
    }
}

pub type Result<T> = std::result::Result<T, ShortkeepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ShortkeepError::invalid_input("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ShortkeepError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ShortkeepError::internal_inconsistency("stored value broken").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ShortkeepError::generation_exhausted("no keys").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ShortkeepError = io_error.into();
        assert!(matches!(err, ShortkeepError::FileOperation(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_format_simple() {
        let err = ShortkeepError::key_not_found("abc");
        assert_eq!(err.format_simple(), "Key Not Found: abc");
        assert_eq!(err.code(), "E003");
    }
}
