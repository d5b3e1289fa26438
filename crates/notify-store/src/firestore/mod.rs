//! Cloud Firestore REST document store.

pub mod client;
pub mod value;

pub use client::FirestoreStore;
