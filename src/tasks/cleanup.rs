//! Cache Sweep Task
//!
//! Background task that periodically drops expired cache entries. Reads never
//! depend on it: an expired entry is already treated as absent on lookup, the
//! sweep only reclaims the memory.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::repository::UserRepository;

/// Spawns a background task that periodically purges expired cache entries.
///
/// # Arguments
/// * `repository` - Shared repository whose cache is swept
/// * `cleanup_interval_secs` - Interval in seconds between sweeps; must be non-zero
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let repository = Arc::new(UserRepository::with_ttl(Duration::from_secs(1800)));
/// let cleanup_handle = spawn_cleanup_task(repository.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(
    repository: Arc<UserRepository>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = repository.purge_expired();

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let repository = Arc::new(UserRepository::with_ttl(Duration::from_millis(200)));
        repository
            .add("Alice".to_string(), "1 Main St".to_string())
            .unwrap();
        repository.get_all().unwrap();
        assert_eq!(repository.cache_stats().total_entries, 1);

        let handle = spawn_cleanup_task(repository.clone(), 1);

        // Wait for the entry to expire and a sweep to run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        let stats = repository.cache_stats();
        assert_eq!(stats.total_entries, 0, "Expired entry should have been swept");
        assert_eq!(stats.expired, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let repository = Arc::new(UserRepository::with_ttl(Duration::from_secs(3600)));
        repository
            .add("Alice".to_string(), "1 Main St".to_string())
            .unwrap();
        repository.get_all().unwrap();

        let handle = spawn_cleanup_task(repository.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(repository.cache_stats().total_entries, 1);
        assert_eq!(repository.get_all().unwrap().len(), 1);
        assert_eq!(repository.cache_stats().hits, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let repository = Arc::new(UserRepository::with_ttl(Duration::from_secs(60)));

        let handle = spawn_cleanup_task(repository, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
