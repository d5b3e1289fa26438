//! Booking documents.

pub mod model;
pub mod status;

pub use model::{Booking, status_changed};
pub use status::BookingStatus;
