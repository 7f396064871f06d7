//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It restores the store, serves the routes and saves the store on shutdown.

use actix_web::{HttpServer, web};
use anyhow::Result;
use std::path::PathBuf;
use tracing::{error, warn};

use crate::api::create_app;
use crate::api::services::AppStartTime;
use crate::config::AppConfig;
use crate::runtime::lifetime;
use crate::services::LinkService;

/// Run the HTTP server
///
/// This function:
/// 1. Restores the store from the storage file
/// 2. Binds the listen address and serves requests
/// 3. Waits for Ctrl+C / SIGTERM, drains in-flight requests and saves the store
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &AppConfig) -> Result<()> {
    let app_start_time = AppStartTime::now();
    let storage_path = PathBuf::from(&config.storage.file_path);

    let store = lifetime::startup::prepare_store(&storage_path).map_err(|e| {
        error!("Server startup failed: {}", e);
        e
    })?;
    let link_service = web::Data::new(LinkService::new(
        store.clone(),
        config.server.base_url.clone(),
    ));
    let app_start_time = web::Data::new(app_start_time);

    let server = HttpServer::new(move || {
        create_app(link_service.clone(), app_start_time.clone())
    })
    .disable_signals()
    .bind(&config.server.address)?;

    warn!(
        "Starting server at http://{} (short links under {})",
        config.server.address, config.server.base_url
    );

    let server = server.run();
    let handle = server.handle();

    // Wait for server or shutdown signal
    tokio::select! {
        res = server => {
            if let Err(e) = res {
                error!("HTTP server terminated with error: {}", e);
                lifetime::shutdown::persist_on_shutdown(store, storage_path).await;
                return Err(e.into());
            }
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            handle.stop(true).await;
            warn!("Graceful shutdown: in-flight requests completed");
        }
    }

    lifetime::shutdown::persist_on_shutdown(store, storage_path).await;
    Ok(())
}
