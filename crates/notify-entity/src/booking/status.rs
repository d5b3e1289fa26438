//! Booking status values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a booking as written by the booking flows.
///
/// Known values parse into dedicated variants; anything else is kept
/// verbatim in [`BookingStatus::Other`], so two statuses compare equal
/// exactly when their stored strings do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    /// Awaiting the landlord's decision.
    Pending,
    /// Accepted by the landlord.
    Accepted,
    /// Rejected by the landlord.
    Rejected,
    /// Withdrawn by the tenant.
    Cancelled,
    /// Any other value written by an external flow.
    Other(String),
}

impl BookingStatus {
    /// Parse from the stored string.
    pub fn from_str_value(s: &str) -> Self {
        match s {
            "pending" => Self::Pending,
            "accepted" => Self::Accepted,
            "rejected" => Self::Rejected,
            "cancelled" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }

    /// Return the stored string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
            Self::Other(s) => s,
        }
    }

    /// Uppercased form used in notification text, e.g. `ACCEPTED`.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl From<String> for BookingStatus {
    fn from(value: String) -> Self {
        Self::from_str_value(&value)
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
