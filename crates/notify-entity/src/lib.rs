//! # notify-entity
//!
//! Read models for the documents Booking Notify consumes. Both record types
//! are owned by external flows; this crate only decodes them from document
//! field sets and never writes them back.

pub mod booking;
pub mod recipient;
pub mod user;

pub use booking::{Booking, BookingStatus};
pub use recipient::RecipientRole;
pub use user::UserRecord;
