//! Shared domain types: identifiers, document field sets, and push payloads.

pub mod fields;
pub mod id;
pub mod push;

pub use fields::FieldSet;
pub use id::RecipientId;
pub use push::{DeliveryToken, PushPayload, PushReceipt};
