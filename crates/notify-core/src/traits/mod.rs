//! Core traits defined in `notify-core` and implemented by provider crates.

pub mod document_store;
pub mod push_sender;

pub use document_store::DocumentStore;
pub use push_sender::PushSender;
