//! API Handlers
//!
//! HTTP request handlers for each user registry endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::config::Config;
use crate::error::Result;
use crate::models::{
    DeleteResponse, HealthResponse, StatsResponse, UpdateResponse, User, UserId, UserRequest,
};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Validating front for the repository
    pub users: UserService,
}

impl AppState {
    /// Creates a new AppState around an existing repository.
    pub fn new(repository: Arc<UserRepository>) -> Self {
        Self {
            users: UserService::new(repository),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds an empty store and a cache using the configured TTL.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(UserRepository::with_ttl(config.cache_ttl())))
    }

    /// Shared handle to the repository, used by background tasks.
    pub fn repository(&self) -> Arc<UserRepository> {
        Arc::clone(self.users.repository())
    }
}

/// Handler for GET /users
pub async fn list_users_handler(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    Ok(Json(state.users.list()?))
}

/// Handler for GET /users/:id
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<User>> {
    Ok(Json(state.users.get(id)?))
}

/// Handler for POST /users
///
/// Responds 201 with the created user, 409 if the name is taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.users.create(req)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Handler for PUT /users/:id
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(req): Json<UserRequest>,
) -> Result<Json<UpdateResponse>> {
    state.users.update(id, req)?;
    Ok(Json(UpdateResponse::new(id)))
}

/// Handler for DELETE /users/:id
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<DeleteResponse>> {
    state.users.delete(id)?;
    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /stats
///
/// Returns the user count and cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let repository = state.users.repository();
    let users = repository.len()?;
    let stats = repository.cache_stats();

    Ok(Json(StatsResponse::new(users, &stats)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
