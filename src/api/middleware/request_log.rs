//! HTTP request logging middleware
//!
//! Emits one `tracing` event per request with method, uri, status,
//! duration and client IP.

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{info, warn};

/// Request logging middleware factory
#[derive(Clone, Default)]
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerService {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestLoggerService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let start = Instant::now();

        let method = req.method().to_string();
        let uri = req.uri().to_string();
        let client_ip = client_ip(&req);

        Box::pin(async move {
            let result = srv.call(req).await;
            let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

            match &result {
                Ok(response) => info!(
                    uri = %uri,
                    method = %method,
                    status = response.status().as_u16(),
                    duration_ms,
                    client_ip = %client_ip,
                    "request handled"
                ),
                Err(e) => warn!(
                    uri = %uri,
                    method = %method,
                    duration_ms,
                    client_ip = %client_ip,
                    error = %e,
                    "request failed"
                ),
            }

            result
        })
    }
}

/// 客户端 IP：优先 X-Real-IP，其次 Forwarded / X-Forwarded-For，最后对端地址
fn client_ip(req: &ServiceRequest) -> String {
    if let Some(ip) = req
        .headers()
        .get("X-Real-IP")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        return ip.to_string();
    }

    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}
