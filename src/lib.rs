//! User Registry - A small user CRUD service
//!
//! Keeps user records in memory and serves reads through a TTL cache that is
//! invalidated on every write.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod storage;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, UserError};
pub use repository::UserRepository;
pub use service::UserService;
pub use tasks::spawn_cleanup_task;
