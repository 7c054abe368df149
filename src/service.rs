//! User Service
//!
//! Boundary between transport and the repository: validates request fields and
//! delegates to the repository.

use std::sync::Arc;

use crate::error::{Result, UserError};
use crate::models::{User, UserId, UserRequest};
use crate::repository::UserRepository;

/// Validating front for [`UserRepository`].
#[derive(Debug, Clone)]
pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<UserRepository> {
        &self.repository
    }

    /// Lists every user in creation order.
    pub fn list(&self) -> Result<Vec<User>> {
        self.repository.get_all()
    }

    pub fn get(&self, id: UserId) -> Result<User> {
        self.repository.get(id)
    }

    /// Creates a user, failing with `Duplicate` if the name is taken.
    pub fn create(&self, req: UserRequest) -> Result<User> {
        validate(&req)?;
        self.repository.add(req.name, req.address)
    }

    /// Replaces a user's name and address.
    pub fn update(&self, id: UserId, req: UserRequest) -> Result<()> {
        validate(&req)?;
        self.repository.update(id, req.name, req.address).map(|_| ())
    }

    pub fn delete(&self, id: UserId) -> Result<()> {
        self.repository.delete(id)
    }
}

fn validate(req: &UserRequest) -> Result<()> {
    match req.validate() {
        Some(msg) => Err(UserError::Validation(msg)),
        None => Ok(()),
    }
}
