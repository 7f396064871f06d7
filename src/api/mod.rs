//! HTTP layer: handlers, route registration and middleware

pub mod middleware;
pub mod services;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Compress;
use actix_web::{App, Error, web};

use crate::services::LinkService;
use middleware::RequestLogger;
use services::AppStartTime;

pub use services::configure_routes;

/// 请求体上限（1 MiB）
pub const MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

/// Build the application served by every worker: shared state, body limit,
/// compression, request logging and the route table.
pub fn create_app(
    link_service: web::Data<LinkService>,
    app_start_time: web::Data<AppStartTime>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Compress::default())
        .wrap(RequestLogger)
        .app_data(link_service)
        .app_data(app_start_time)
        .app_data(web::PayloadConfig::new(MAX_PAYLOAD_BYTES))
        .configure(configure_routes)
}
