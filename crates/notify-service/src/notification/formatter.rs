//! Notification text for booking events.

use notify_core::types::push::PushPayload;
use notify_entity::booking::{Booking, BookingStatus};

/// Formats push payloads for booking events.
pub struct NotificationFormatter;

impl NotificationFormatter {
    /// Title of the landlord's new-request notification.
    pub const BOOKING_REQUESTED_TITLE: &'static str = "New Booking Request! 🏡";

    /// Formats the landlord's notification for a new booking request.
    pub fn booking_requested(booking: &Booking, sound: &str) -> PushPayload {
        PushPayload::new(
            Self::BOOKING_REQUESTED_TITLE,
            format!(
                "{} wants to book: {}.",
                booking.tenant_name_or_default(),
                booking.property_title_or_default()
            ),
        )
        .with_sound(sound)
    }

    /// Formats the tenant's notification for a status change.
    pub fn booking_status_changed(booking: &Booking, status: &BookingStatus) -> PushPayload {
        let label = status.label();
        PushPayload::new(
            format!("Booking {label}! 🎉"),
            format!(
                "Your request for \"{}\" has been {label}.",
                booking.property_title_or_default()
            ),
        )
    }
}
