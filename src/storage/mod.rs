//! Storage Module
//!
//! The in-memory source of truth for user records.

mod user_store;

pub use user_store::UserStore;
