//! # notify-push
//!
//! Push-messaging providers for Booking Notify:
//!
//! - **fcm**: Firebase Cloud Messaging HTTP send endpoint
//! - **log**: writes the message to the log instead of delivering it
//!
//! The provider is selected at runtime based on configuration.

#[cfg(feature = "fcm")]
pub mod fcm;
pub mod log;
pub mod provider;

pub use provider::PushManager;
