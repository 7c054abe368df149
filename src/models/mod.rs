//! Domain record and HTTP DTOs for the user registry
//!
//! This module defines the user record and the types used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod user;

// Re-export commonly used types
pub use requests::UserRequest;
pub use responses::{DeleteResponse, HealthResponse, StatsResponse, UpdateResponse};
pub use user::{User, UserId};
