//! Firebase Cloud Messaging HTTP sender.

pub mod client;
pub mod model;

pub use client::FcmPushSender;
