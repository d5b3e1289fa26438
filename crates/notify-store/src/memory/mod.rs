//! In-memory document store backed by moka.

pub mod store;

pub use store::MemoryDocumentStore;
