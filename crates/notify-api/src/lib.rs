//! # notify-api
//!
//! HTTP trigger intake for Booking Notify built on Axum.
//!
//! The hosting platform posts document-lifecycle events for the bookings
//! collection; each request runs one handler invocation and always answers
//! `200 OK` with the invocation outcome once the event is well formed.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use state::AppState;
