pub mod health;
pub mod redirect;
pub mod shorten;

use actix_web::{HttpResponse, web};

pub use health::{AppStartTime, HealthService};
pub use redirect::RedirectService;
pub use shorten::ShortenService;

/// Fallback for registered routes hit with an unsupported method
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header(("Content-Type", "text/plain; charset=utf-8"))
        .body("Method Not Allowed")
}

/// Register every route on an `App` or scope.
///
/// `/health` and `/api/shorten` are registered before the `/{id}` catch-all
/// so they are never treated as short keys.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::post().to(ShortenService::shorten_plain))
            .route(web::get().to(RedirectService::missing_id))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/shorten")
            .route(web::post().to(ShortenService::shorten_json))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/health")
            .route(web::get().to(HealthService::health_check))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(RedirectService::handle_redirect))
            .default_service(web::to(method_not_allowed)),
    );
}
