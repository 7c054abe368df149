//! API Module
//!
//! HTTP handlers and routing for the user registry REST API.
//!
//! # Endpoints
//! - `GET /users` - List all users
//! - `POST /users` - Create a user
//! - `GET /users/:id` - Fetch one user
//! - `PUT /users/:id` - Update a user
//! - `DELETE /users/:id` - Delete a user
//! - `GET /stats` - User count and cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
