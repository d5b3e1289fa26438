//! Push payload formatting and the shared recipient dispatch path.

pub mod dispatcher;
pub mod formatter;
pub mod outcome;

pub use dispatcher::RecipientNotifier;
pub use formatter::NotificationFormatter;
pub use outcome::{DispatchOutcome, SkipReason};
