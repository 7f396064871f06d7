use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::errors::{Result, ShortkeepError};
use crate::storage::{self, KvStore};

/// 保存数据的超时时间（秒）
const PERSIST_TIMEOUT_SECS: u64 = 30;

/// Resolve once Ctrl+C (or SIGTERM on unix) is received.
pub async fn listen_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received, flushing data...");
}

/// Save `store` to `path` on a blocking thread, bounded by a timeout.
pub async fn persist_store(store: Arc<KvStore>, path: PathBuf) -> Result<usize> {
    let task = tokio::task::spawn_blocking(move || storage::save(&store, &path));

    match timeout(Duration::from_secs(PERSIST_TIMEOUT_SECS), task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(ShortkeepError::file_operation(format!(
            "Persist task failed: {}",
            join_error
        ))),
        Err(_) => Err(ShortkeepError::file_operation(format!(
            "Persist timed out after {} seconds",
            PERSIST_TIMEOUT_SECS
        ))),
    }
}

/// Final flush on shutdown. Failures are logged; the process exits either way.
pub async fn persist_on_shutdown(store: Arc<KvStore>, path: PathBuf) {
    info!("Saving data to {}", path.display());
    match persist_store(store, path).await {
        Ok(count) => info!("Data saved successfully ({} short links)", count),
        Err(e) => error!("Saving data failed: {}", e),
    }
}
