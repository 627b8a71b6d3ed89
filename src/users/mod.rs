//! # Users Module
//!
//! This module handles user creation requests:
//! - Request model for `POST /users`
//! - Field rules for the request body
//! - Handler producing the success message

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

use crate::common::ValidatorRegistry;

pub use models::CreateUserRequest;
pub use routes::users_routes;

/// Registers the validators for every request type this module accepts
pub fn register_validators(registry: &mut ValidatorRegistry) {
    registry.register::<CreateUserRequest, _>(validators::CreateUserValidator);
}
