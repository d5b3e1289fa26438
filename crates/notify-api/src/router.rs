//! Route definitions for the trigger intake.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/events", event_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Document-lifecycle trigger routes.
fn event_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings/created",
            post(handlers::events::booking_created),
        )
        .route(
            "/bookings/updated",
            post(handlers::events::booking_updated),
        )
}
