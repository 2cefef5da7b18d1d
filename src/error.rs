//! Error types
//!
//! Every error here is recoverable: callers report it and ask again.

use thiserror::Error;

/// Nutrition engine error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionError {
    #[error("Food not found: {0}")]
    NotFound(String),

    #[error("Quantity must be a positive number of grams, got {0}")]
    InvalidQuantity(f64),

    #[error("Activity level must be between 1 and 5, got {0}")]
    InvalidActivityLevel(i64),

    #[error("Profile is incomplete: set age, weight, height and activity level first")]
    ProfileIncomplete,

    #[error("Food already exists: {0}")]
    DuplicateFood(String),

    #[error("Invalid food record: {0}")]
    InvalidFood(String),

    #[error("Unrecognized quantity: {0}")]
    InvalidUnit(String),
}

/// Result type for nutrition operations
pub type NutritionResult<T> = Result<T, NutritionError>;
