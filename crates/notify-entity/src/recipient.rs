//! Recipient roles in the booking workflow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a booking a notification is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientRole {
    /// Owner of the property; notified of new booking requests.
    Landlord,
    /// Requester of the booking; notified of status changes.
    Tenant,
}

impl RecipientRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landlord => "landlord",
            Self::Tenant => "tenant",
        }
    }
}

impl fmt::Display for RecipientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
