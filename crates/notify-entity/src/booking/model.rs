//! Booking read model.

use notify_core::types::fields::{self, FieldSet};
use notify_core::types::id::RecipientId;

use super::status::BookingStatus;

/// Field names as stored in booking documents.
pub mod field {
    /// Landlord's user document ID.
    pub const LANDLORD_ID: &str = "landlordId";
    /// Tenant's user document ID.
    pub const TENANT_ID: &str = "tenantId";
    /// Tenant display name.
    pub const TENANT_NAME: &str = "tenantName";
    /// Property display title.
    pub const PROPERTY_TITLE: &str = "propertyTitle";
    /// Booking status.
    pub const STATUS: &str = "status";
}

/// A booking as seen by the notifier.
///
/// Every field is optional: documents are written by other flows and the
/// notifier decides per handler which absences abort a dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Booking {
    /// Landlord's user document ID.
    pub landlord_id: Option<RecipientId>,
    /// Tenant's user document ID.
    pub tenant_id: Option<RecipientId>,
    /// Tenant display name.
    pub tenant_name: Option<String>,
    /// Property display title.
    pub property_title: Option<String>,
    /// Booking status, when present as a non-empty string.
    pub status: Option<BookingStatus>,
}

impl Booking {
    /// Decode a booking from a document field set.
    pub fn from_fields(data: &FieldSet) -> Self {
        Self {
            landlord_id: fields::non_empty_str(data, field::LANDLORD_ID)
                .and_then(RecipientId::parse),
            tenant_id: fields::non_empty_str(data, field::TENANT_ID).and_then(RecipientId::parse),
            tenant_name: data
                .get(field::TENANT_NAME)
                .and_then(|v| v.as_str())
                .map(str::to_string),
            property_title: data
                .get(field::PROPERTY_TITLE)
                .and_then(|v| v.as_str())
                .map(str::to_string),
            status: fields::non_empty_str(data, field::STATUS).map(BookingStatus::from_str_value),
        }
    }

    /// Tenant name for display; empty when absent.
    pub fn tenant_name_or_default(&self) -> &str {
        self.tenant_name.as_deref().unwrap_or_default()
    }

    /// Property title for display; empty when absent.
    pub fn property_title_or_default(&self) -> &str {
        self.property_title.as_deref().unwrap_or_default()
    }
}

/// Whether the stored `status` value differs between two images.
///
/// Compares the raw stored values so that a field going from absent to
/// present (or changing type) counts as a change.
pub fn status_changed(before: &FieldSet, after: &FieldSet) -> bool {
    before.get(field::STATUS) != after.get(field::STATUS)
}
