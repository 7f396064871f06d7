use actix_web::http::header;
use actix_web::{HttpResponse, web};
use tracing::{error, trace};

use crate::errors::{Result, ShortkeepError};
use crate::services::LinkService;
use crate::utils::is_valid_short_key;

pub struct RedirectService;

impl RedirectService {
    /// `GET /{id}` - 307 to the stored long URL
    pub async fn handle_redirect(
        path: web::Path<String>,
        service: web::Data<LinkService>,
    ) -> Result<HttpResponse> {
        let key = path.into_inner();

        // 先查存储：手工编辑进文件的 key 可能不符合生成规则
        let target = service.expand(&key).inspect_err(|e| match e {
            ShortkeepError::InternalInconsistency(msg) => {
                error!("Refusing to redirect: {}", msg);
            }
            ShortkeepError::NotFound(_) if !is_valid_short_key(&key) => {
                trace!("Unknown malformed short key: {}", key);
            }
            _ => {}
        })?;

        Ok(HttpResponse::TemporaryRedirect()
            .insert_header((header::LOCATION, target))
            .finish())
    }

    /// `GET /` - the id segment is empty
    pub async fn missing_id() -> Result<HttpResponse> {
        Err(ShortkeepError::invalid_input("ID is required"))
    }
}
