//! User Store Module
//!
//! Authoritative in-memory holder of every live user, kept in insertion order.

use crate::models::{User, UserId};

// == User Store ==
/// Ordered list of users plus the identifier counter.
///
/// The store enforces no uniqueness; that is the repository's job.
#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    /// Next identifier to hand out; never reused, even after deletes
    next_id: UserId,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Reserves and returns the next identifier.
    pub fn next_id(&mut self) -> UserId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // == Add ==
    /// Appends a user. Never fails.
    pub fn add(&mut self, user: User) {
        // Keep the counter ahead of any externally chosen id
        if user.id >= self.next_id {
            self.next_id = user.id + 1;
        }
        self.users.push(user);
    }

    // == Get All ==
    /// Returns every user in insertion order.
    pub fn get_all(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Finds the live user whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    // == Update ==
    /// Replaces the user with `id` in place, keeping its position.
    ///
    /// The stored id is preserved whatever `user.id` says. Returns false if no
    /// such user exists.
    pub fn update(&mut self, id: UserId, user: User) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(slot) => {
                *slot = User { id, ..user };
                true
            }
            None => false,
        }
    }

    // == Remove ==
    /// Removes the user with `id`. Returns false if no such user exists.
    pub fn remove(&mut self, id: UserId) -> bool {
        match self.users.iter().position(|u| u.id == id) {
            Some(index) => {
                self.users.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
