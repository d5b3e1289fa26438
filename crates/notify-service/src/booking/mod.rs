//! Booking lifecycle handlers.

pub mod created;
pub mod updated;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use tracing::{Instrument, info_span, warn};

use notify_core::config::push::PushConfig;
use notify_core::config::store::StoreConfig;
use notify_core::events::{DocumentPath, LifecycleEvent, TriggerEvent};
use notify_core::traits::document_store::DocumentStore;
use notify_core::traits::push_sender::PushSender;

use crate::notification::dispatcher::RecipientNotifier;
use crate::notification::outcome::DispatchOutcome;

/// Settings the booking handlers need from configuration.
#[derive(Debug, Clone)]
pub struct NotifierSettings {
    /// Collection holding user records.
    pub users_collection: String,
    /// Collection whose lifecycle events are handled.
    pub bookings_collection: String,
    /// Sound hint for new-request notifications.
    pub default_sound: String,
}

impl NotifierSettings {
    /// Build settings from the store and push configuration sections.
    pub fn from_config(store: &StoreConfig, push: &PushConfig) -> Self {
        Self {
            users_collection: store.users_collection.clone(),
            bookings_collection: store.bookings_collection.clone(),
            default_sound: push.default_sound.clone(),
        }
    }
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default(), &PushConfig::default())
    }
}

/// Reacts to booking lifecycle events with push notifications.
///
/// Holds no per-invocation state; one instance serves all invocations
/// concurrently.
#[derive(Debug, Clone)]
pub struct BookingNotifier {
    /// Shared lookup-and-send path.
    recipients: RecipientNotifier,
    /// Handler settings.
    settings: NotifierSettings,
}

impl BookingNotifier {
    /// Create a new booking notifier.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        push: Arc<dyn PushSender>,
        settings: NotifierSettings,
    ) -> Self {
        Self {
            recipients: RecipientNotifier::new(store, push, settings.users_collection.clone()),
            settings,
        }
    }

    /// Handler settings.
    pub fn settings(&self) -> &NotifierSettings {
        &self.settings
    }

    /// Whether events for `document` are handled by this notifier.
    pub fn accepts(&self, document: &DocumentPath) -> bool {
        document.collection_name() == self.settings.bookings_collection
    }

    /// Route a trigger event to the matching handler.
    pub async fn handle(&self, event: &TriggerEvent) -> DispatchOutcome {
        let span = info_span!(
            "booking_event",
            invocation_id = %event.id,
            booking = %event.document,
            kind = event.payload.kind(),
        );

        async {
            if !self.accepts(&event.document) {
                warn!(
                    collection = event.document.collection(),
                    "Event for a collection other than bookings"
                );
            }

            match &event.payload {
                LifecycleEvent::Created { data } => self.on_booking_created(data.as_ref()).await,
                LifecycleEvent::Updated { before, after } => {
                    self.on_booking_updated(before, after).await
                }
            }
        }
        .instrument(span)
        .await
    }
}
