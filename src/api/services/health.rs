use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::services::LinkService;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub links: usize,
    pub uptime_secs: u64,
}

pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        service: web::Data<LinkService>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        trace!("Received health check request");

        let uptime_secs = (chrono::Utc::now() - app_start_time.start_datetime)
            .num_seconds()
            .max(0) as u64;

        HttpResponse::Ok().json(HealthResponse {
            status: "ok".to_string(),
            links: service.count(),
            uptime_secs,
        })
    }
}
