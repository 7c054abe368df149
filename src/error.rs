//! Error types for the user registry
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == User Error Enum ==
/// Unified error type for the user registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// Malformed input, rejected before reaching the repository
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Another live user already has this name
    #[error("User with name '{0}' already exists")]
    Duplicate(String),

    /// No user with this identifier
    #[error("User {0} not found")]
    NotFound(u64),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    /// Error used when a store or cache lock was poisoned by a panicking holder.
    pub(crate) fn poisoned(what: &str) -> Self {
        UserError::Internal(format!("{} lock poisoned", what))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match &self {
            UserError::Validation(_) => StatusCode::BAD_REQUEST,
            UserError::Duplicate(_) => StatusCode::CONFLICT,
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the user registry.
pub type Result<T> = std::result::Result<T, UserError>;
