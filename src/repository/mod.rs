//! Repository Module
//!
//! Combines the user store and the TTL cache behind one read/write contract.

mod user_repository;

#[cfg(test)]
mod property_tests;

pub use user_repository::{user_key, CachedUsers, UserRepository, ALL_USERS_KEY};
