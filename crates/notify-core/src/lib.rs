//! # notify-core
//!
//! Core crate for Booking Notify. Contains the document-store and push-sender
//! traits, configuration schemas, typed identifiers, trigger events, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Booking Notify crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
