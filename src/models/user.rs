//! User record
//!
//! The single entity held by the registry.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a user on creation.
pub type UserId = u64;

/// A registered user.
///
/// `id` is assigned by the store and never changes; `name` is unique among
/// live users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub address: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
        }
    }
}
