//! # notify-service
//!
//! Booking lifecycle handlers for Booking Notify:
//!
//! - **created**: tells the landlord about a new booking request
//! - **updated**: tells the tenant when the booking status changes
//!
//! Both handlers share one lookup-and-send path in
//! [`notification::RecipientNotifier`]. Every abort condition is logged and
//! reported as a [`DispatchOutcome`]; nothing is propagated as an error.

pub mod booking;
pub mod notification;

pub use booking::{BookingNotifier, NotifierSettings};
pub use notification::{DispatchOutcome, RecipientNotifier, SkipReason};
