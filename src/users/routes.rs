//! User routes

use axum::{routing::post, Router};

use super::handlers;

/// Creates the users router
///
/// # Routes
/// - `POST /users` - Validate and accept a new user
pub fn users_routes() -> Router {
    Router::new().route("/users", post(handlers::create_user))
}
