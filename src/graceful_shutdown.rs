use tokio::signal;
use tracing::{error, warn};

/// Resolves once the process is asked to stop (Ctrl+C, or SIGTERM on unix).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("🛑 Ctrl+C received, draining in-flight requests...")
        },
        _ = terminate => {
            warn!("🛑 SIGTERM received, draining in-flight requests...");
        }
    }
}

/// Waits for a shutdown signal, then stops the server gracefully.
pub async fn stop_on_signal(handle: actix_web::dev::ServerHandle) {
    shutdown_signal().await;
    handle.stop(true).await;
}
