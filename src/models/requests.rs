//! Request DTOs for the user registry API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Maximum allowed name length in bytes
pub const MAX_NAME_LENGTH: usize = 256;

/// Maximum allowed address length in bytes
pub const MAX_ADDRESS_LENGTH: usize = 1024;

/// Request body for creating (POST /users) or replacing (PUT /users/:id) a user
///
/// # Fields
/// - `name`: Unique display name, must not be blank
/// - `address`: Postal address, must not be blank
#[derive(Debug, Clone, Deserialize)]
pub struct UserRequest {
    /// The user's name
    pub name: String,
    /// The user's address
    pub address: String,
}

impl UserRequest {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if self.name.len() > MAX_NAME_LENGTH {
            return Some(format!(
                "Name exceeds maximum length of {} bytes",
                MAX_NAME_LENGTH
            ));
        }
        if self.address.trim().is_empty() {
            return Some("Address cannot be empty".to_string());
        }
        if self.address.len() > MAX_ADDRESS_LENGTH {
            return Some(format!(
                "Address exceeds maximum length of {} bytes",
                MAX_ADDRESS_LENGTH
            ));
        }
        None
    }
}
