//! Booking Notify server
//!
//! Main entry point that wires the store and push providers to the booking
//! handlers and starts the trigger intake.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use notify_core::config::AppConfig;
use notify_core::error::AppError;
use notify_core::traits::document_store::DocumentStore;
use notify_core::traits::push_sender::PushSender;
use notify_push::PushManager;
use notify_store::StoreManager;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("BOOKING_NOTIFY_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_current_span(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Build providers once per process and serve trigger events.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Booking Notify v{}", env!("CARGO_PKG_VERSION"));

    let store = StoreManager::new(&config.store).await?;
    tracing::info!(provider = store.provider_type(), "Document store initialized");

    let push = PushManager::new(&config.push)?;
    tracing::info!(provider = push.provider_type(), "Push provider initialized");

    let bind_address = config.server.bind_address();
    let app = notify_api::build_app(&config, Arc::new(store), Arc::new(push));

    notify_api::serve(&bind_address, app).await?;

    tracing::info!("Booking Notify stopped");
    Ok(())
}
