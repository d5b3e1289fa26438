//! Convenience result type alias for Booking Notify.

use crate::error::AppError;

/// A specialized `Result` type for Booking Notify operations.
pub type AppResult<T> = Result<T, AppError>;
