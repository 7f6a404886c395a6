//! Field validation for submitted entities.

use crate::error::AppError;

/// Checks run on a submitted body before any store call.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidArgument(format!("{} is required", field)));
    }
    Ok(())
}

pub fn require_positive(field: &str, value: i32) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::InvalidArgument(format!("{} must be at least 1", field)));
    }
    Ok(())
}
