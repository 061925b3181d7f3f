//! Request handlers

pub mod claims;
pub mod applications;
pub mod health;

use crate::error::ApiError;

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
