//! Booking-created handler: notify the landlord of a new request.

use tracing::{error, info};

use notify_core::types::fields::FieldSet;
use notify_entity::booking::Booking;
use notify_entity::recipient::RecipientRole;

use super::BookingNotifier;
use crate::notification::formatter::NotificationFormatter;
use crate::notification::outcome::{DispatchOutcome, SkipReason};

impl BookingNotifier {
    /// Handle a newly created booking document.
    ///
    /// `data` is `None` when the event arrived without a snapshot.
    pub async fn on_booking_created(&self, data: Option<&FieldSet>) -> DispatchOutcome {
        info!("New booking detected, preparing landlord notification");

        let Some(data) = data else {
            error!("Booking created event carried no document data");
            return DispatchOutcome::skipped(SkipReason::MissingEventData);
        };

        let booking = Booking::from_fields(data);
        let Some(landlord_id) = booking.landlord_id.as_ref() else {
            error!("Landlord ID missing on booking");
            return DispatchOutcome::skipped(SkipReason::MissingRecipientId {
                role: RecipientRole::Landlord,
            });
        };

        let payload =
            NotificationFormatter::booking_requested(&booking, &self.settings.default_sound);

        self.recipients
            .notify(RecipientRole::Landlord, landlord_id, &payload)
            .await
    }
}
