//! User Repository Module
//!
//! Coordinates the user store and the query cache: reads go through the cache
//! and fall back to the store, writes go to the store and then drop the cache
//! entries they made stale.

use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::error::{Result, UserError};
use crate::models::{User, UserId};
use crate::storage::UserStore;

/// Cache key for the full user listing
pub const ALL_USERS_KEY: &str = "users:all";

/// Cache key for a single user lookup
pub fn user_key(id: UserId) -> String {
    format!("users:{}", id)
}

// == Cached Value ==
/// Query results held in the cache.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedUsers {
    /// Result of the full listing, in store order
    All(Vec<User>),
    /// Result of a lookup by id
    One(User),
}

// == User Repository ==
/// Read-through, write-invalidate front for the user store.
///
/// Lock order is always store then cache. Cache misses are filled while the
/// store read lock is held, and writes invalidate while the store write lock
/// is held, so a fill can never resurrect data a write has replaced.
#[derive(Debug)]
pub struct UserRepository {
    store: RwLock<UserStore>,
    cache: Mutex<CacheStore<CachedUsers>>,
}

impl UserRepository {
    // == Constructor ==
    /// Builds a repository over an existing store and cache.
    pub fn new(store: UserStore, cache: CacheStore<CachedUsers>) -> Self {
        Self {
            store: RwLock::new(store),
            cache: Mutex::new(cache),
        }
    }

    /// Builds an empty repository whose cache entries live for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self::new(UserStore::new(), CacheStore::new(ttl))
    }

    // == Get All ==
    /// Returns every user in insertion order.
    pub fn get_all(&self) -> Result<Vec<User>> {
        if let Some(CachedUsers::All(users)) = self.cache().get(ALL_USERS_KEY) {
            debug!(count = users.len(), "User list served from cache");
            return Ok(users);
        }

        let store = self.read_store()?;
        let users = store.get_all();
        self.cache()
            .set(ALL_USERS_KEY, CachedUsers::All(users.clone()));
        debug!(count = users.len(), "User list loaded from store");

        Ok(users)
    }

    // == Get ==
    /// Returns the user with `id`.
    pub fn get(&self, id: UserId) -> Result<User> {
        let key = user_key(id);
        if let Some(CachedUsers::One(user)) = self.cache().get(&key) {
            debug!(id, "User served from cache");
            return Ok(user);
        }

        let store = self.read_store()?;
        let user = store.get(id).cloned().ok_or(UserError::NotFound(id))?;
        self.cache().set(key, CachedUsers::One(user.clone()));
        debug!(id, "User loaded from store");

        Ok(user)
    }

    // == Add ==
    /// Creates a user with the next identifier.
    ///
    /// The name check and the insert happen under one store write lock, so two
    /// concurrent creates of the same name cannot both succeed.
    pub fn add(&self, name: String, address: String) -> Result<User> {
        let mut store = self.write_store()?;

        if store.find_by_name(&name).is_some() {
            warn!(name = %name, "Rejected create: name already taken");
            return Err(UserError::Duplicate(name));
        }

        let user = User::new(store.next_id(), name, address);
        store.add(user.clone());
        self.invalidate(user.id);

        info!(id = user.id, name = %user.name, "User created");
        Ok(user)
    }

    // == Update ==
    /// Replaces the name and address of user `id`.
    ///
    /// Fails with `NotFound` if the user does not exist and with `Duplicate`
    /// if another live user already has `name`.
    pub fn update(&self, id: UserId, name: String, address: String) -> Result<User> {
        let mut store = self.write_store()?;

        if store.get(id).is_none() {
            return Err(UserError::NotFound(id));
        }
        if store.find_by_name(&name).is_some_and(|other| other.id != id) {
            warn!(id, name = %name, "Rejected update: name already taken");
            return Err(UserError::Duplicate(name));
        }

        let user = User::new(id, name, address);
        store.update(id, user.clone());
        self.invalidate(id);

        info!(id, name = %user.name, "User updated");
        Ok(user)
    }

    // == Delete ==
    /// Removes user `id`.
    pub fn delete(&self, id: UserId) -> Result<()> {
        let mut store = self.write_store()?;

        if !store.remove(id) {
            return Err(UserError::NotFound(id));
        }
        self.invalidate(id);

        info!(id, "User deleted");
        Ok(())
    }

    /// Number of live users, read from the store.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read_store()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read_store()?.is_empty())
    }

    // == Cache Maintenance ==
    /// Current cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache().stats()
    }

    /// Physically drops expired cache entries, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.cache().cleanup_expired()
    }

    /// Drops every cache entry a write to `id` may have made stale.
    fn invalidate(&self, id: UserId) {
        let mut cache = self.cache();
        cache.invalidate(ALL_USERS_KEY);
        cache.invalidate(&user_key(id));
    }

    // == Lock Helpers ==
    fn read_store(&self) -> Result<RwLockReadGuard<'_, UserStore>> {
        self.store.read().map_err(|_| UserError::poisoned("store"))
    }

    fn write_store(&self) -> Result<RwLockWriteGuard<'_, UserStore>> {
        self.store.write().map_err(|_| UserError::poisoned("store"))
    }

    /// The cache only holds derived data, so a poisoned lock is recovered
    /// rather than failing the request.
    fn cache(&self) -> MutexGuard<'_, CacheStore<CachedUsers>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
