//! Application state shared across all handlers.

use std::sync::Arc;

use notify_core::traits::document_store::DocumentStore;
use notify_core::traits::push_sender::PushSender;
use notify_service::booking::BookingNotifier;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Document store (for health reporting)
    pub store: Arc<dyn DocumentStore>,
    /// Push provider (for health reporting)
    pub push: Arc<dyn PushSender>,
    /// Booking lifecycle handlers
    pub notifier: Arc<BookingNotifier>,
}
