//! User documents.

pub mod model;

pub use model::UserRecord;
