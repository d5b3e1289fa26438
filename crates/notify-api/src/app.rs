//! Application builder and server runner.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use notify_core::config::AppConfig;
use notify_core::error::{AppError, ErrorKind};
use notify_core::traits::document_store::DocumentStore;
use notify_core::traits::push_sender::PushSender;
use notify_service::booking::{BookingNotifier, NotifierSettings};

use crate::router::build_router;
use crate::state::AppState;

/// Wire the booking handlers to the given providers and build the router.
pub fn build_app(
    config: &AppConfig,
    store: Arc<dyn DocumentStore>,
    push: Arc<dyn PushSender>,
) -> Router {
    let settings = NotifierSettings::from_config(&config.store, &config.push);
    let notifier = BookingNotifier::new(Arc::clone(&store), Arc::clone(&push), settings);

    build_router(AppState {
        store,
        push,
        notifier: Arc::new(notifier),
    })
}

/// Bind the configured address and serve until Ctrl+C.
pub async fn serve(bind_address: &str, app: Router) -> Result<(), AppError> {
    let listener = TcpListener::bind(bind_address).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Internal,
            format!("Failed to bind {bind_address}: {e}"),
            e,
        )
    })?;

    info!(address = %bind_address, "Trigger intake listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, format!("Server error: {e}"), e))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
