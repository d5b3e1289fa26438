//! # notify-store
//!
//! Document store providers for Booking Notify. Supports two modes:
//!
//! - **memory**: In-process store using [moka](https://crates.io/crates/moka),
//!   for local development and tests
//! - **firestore**: Cloud Firestore REST API using
//!   [reqwest](https://crates.io/crates/reqwest)
//!
//! The provider is selected at runtime based on configuration.

#[cfg(feature = "firestore")]
pub mod firestore;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;

pub use provider::StoreManager;
