//! Response DTOs for the user registry API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::UserId;

/// Response body for a successful update (PUT /users/:id)
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    /// Success message
    pub message: String,
    /// The user that was updated
    pub id: UserId,
}

impl UpdateResponse {
    pub fn new(id: UserId) -> Self {
        Self {
            message: format!("User {} updated successfully", id),
            id,
        }
    }
}

/// Response body for a successful delete (DELETE /users/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The user that was deleted
    pub id: UserId,
}

impl DeleteResponse {
    pub fn new(id: UserId) -> Self {
        Self {
            message: format!("User {} deleted successfully", id),
            id,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of live users in the store
    pub users: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of cache entries dropped by writes
    pub invalidations: u64,
    /// Number of cache entries dropped after their TTL
    pub expired: u64,
    /// Current number of entries in cache
    pub cache_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from the user count and cache statistics
    pub fn new(users: usize, stats: &CacheStats) -> Self {
        Self {
            users,
            hits: stats.hits,
            misses: stats.misses,
            invalidations: stats.invalidations,
            expired: stats.expired,
            cache_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
