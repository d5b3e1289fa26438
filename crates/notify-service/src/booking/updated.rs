//! Booking-updated handler: notify the tenant of a status change.

use tracing::{error, info};

use notify_core::types::fields::FieldSet;
use notify_entity::booking::{Booking, status_changed};
use notify_entity::recipient::RecipientRole;

use super::BookingNotifier;
use crate::notification::formatter::NotificationFormatter;
use crate::notification::outcome::{DispatchOutcome, SkipReason};

impl BookingNotifier {
    /// Handle an update to a booking document.
    ///
    /// Only a change of the `status` field leads to a notification.
    pub async fn on_booking_updated(&self, before: &FieldSet, after: &FieldSet) -> DispatchOutcome {
        info!("Booking update detected, checking status");

        if !status_changed(before, after) {
            info!("Status not changed, no notification sent");
            return DispatchOutcome::skipped(SkipReason::StatusUnchanged);
        }

        let booking = Booking::from_fields(after);
        let Some(tenant_id) = booking.tenant_id.as_ref() else {
            error!("Tenant ID missing on booking");
            return DispatchOutcome::skipped(SkipReason::MissingRecipientId {
                role: RecipientRole::Tenant,
            });
        };

        let Some(status) = booking.status.as_ref() else {
            error!("Updated booking has no usable status value");
            return DispatchOutcome::skipped(SkipReason::MissingStatus);
        };

        info!(%status, "Booking status changed");
        let payload = NotificationFormatter::booking_status_changed(&booking, status);

        self.recipients
            .notify(RecipientRole::Tenant, tenant_id, &payload)
            .await
    }
}
