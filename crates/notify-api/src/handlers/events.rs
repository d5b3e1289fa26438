//! Booking lifecycle trigger handlers.
//!
//! A well-formed event always yields `200 OK` with the invocation outcome,
//! including skipped and failed dispatches, so the platform never retries.

use axum::Json;
use axum::extract::State;

use notify_core::error::AppError;
use notify_core::events::{DocumentPath, LifecycleEvent, TriggerEvent};

use crate::dto::request::{CreatedEventRequest, UpdatedEventRequest};
use crate::dto::response::EventResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /events/bookings/created
pub async fn booking_created(
    State(state): State<AppState>,
    Json(req): Json<CreatedEventRequest>,
) -> Result<Json<EventResponse>, ApiError> {
    let document = booking_document(&state, &req.document)?;
    let event = TriggerEvent::new(document, LifecycleEvent::Created { data: req.data });
    Ok(Json(dispatch(&state, event).await))
}

/// POST /events/bookings/updated
pub async fn booking_updated(
    State(state): State<AppState>,
    Json(req): Json<UpdatedEventRequest>,
) -> Result<Json<EventResponse>, ApiError> {
    let document = booking_document(&state, &req.document)?;
    let event = TriggerEvent::new(
        document,
        LifecycleEvent::Updated {
            before: req.before,
            after: req.after,
        },
    );
    Ok(Json(dispatch(&state, event).await))
}

/// Parse the event's document path and check it belongs to the bookings collection.
fn booking_document(state: &AppState, raw: &str) -> Result<DocumentPath, AppError> {
    let document: DocumentPath = raw.parse()?;
    if !state.notifier.accepts(&document) {
        return Err(AppError::validation(format!(
            "Document '{document}' is not in the '{}' collection",
            state.notifier.settings().bookings_collection
        )));
    }
    Ok(document)
}

async fn dispatch(state: &AppState, event: TriggerEvent) -> EventResponse {
    let outcome = state.notifier.handle(&event).await;
    tracing::info!(
        invocation_id = %event.id,
        booking = %event.document,
        outcome = outcome.label(),
        "Booking event handled"
    );
    EventResponse {
        invocation_id: event.id,
        outcome,
    }
}
