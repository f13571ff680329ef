//! Convenience result type alias for Gatepass.

use crate::error::AppError;

/// A specialized `Result` type for Gatepass operations.
pub type AppResult<T> = Result<T, AppError>;
