use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{Result, ShortkeepError};
use crate::services::LinkService;

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub result: String,
}

pub struct ShortenService;

impl ShortenService {
    /// `POST /` - raw text body holding the long URL
    pub async fn shorten_plain(
        body: web::Bytes,
        service: web::Data<LinkService>,
    ) -> Result<HttpResponse> {
        let raw = std::str::from_utf8(&body)
            .map_err(|_| ShortkeepError::invalid_input("Request body must be UTF-8 text"))?;

        if raw.trim().is_empty() {
            return Err(ShortkeepError::invalid_input("Invalid request body"));
        }

        let link = service.shorten(raw)?;

        Ok(HttpResponse::Created()
            .insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(link.short_url))
    }

    /// `POST /api/shorten` - JSON body `{"url": "..."}`
    pub async fn shorten_json(
        req: HttpRequest,
        body: web::Bytes,
        service: web::Data<LinkService>,
    ) -> Result<HttpResponse> {
        if !is_json_content_type(&req) {
            return Err(ShortkeepError::invalid_input(
                "Content-Type must be application/json",
            ));
        }

        let request: ShortenRequest = serde_json::from_slice(&body).map_err(|e| {
            debug!("Rejected shorten request body: {}", e);
            ShortkeepError::invalid_input("Invalid JSON format")
        })?;

        let link = service.shorten(&request.url)?;

        Ok(HttpResponse::Created().json(ShortenResponse {
            result: link.short_url,
        }))
    }
}

/// 只比较 MIME 本体，允许 `; charset=utf-8` 等参数
fn is_json_content_type(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
