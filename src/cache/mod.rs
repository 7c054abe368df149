//! Cache Module
//!
//! Provides a typed in-memory cache with per-entry absolute expiration.

mod entry;
mod stats;
mod store;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
