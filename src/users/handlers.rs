//! User handlers

use axum::Json;
use tracing::info;

use super::models::{CreateUserRequest, MessageResponse};
use crate::common::{safe_email_log, Validated};

/// POST /users
/// Accepts a user whose body already passed binding and validation
///
/// # Request Body
/// ```json
/// {
///   "name": "Anton Havrylov",
///   "email": "anton@example.com"
/// }
/// ```
///
/// # Response
/// ```json
/// {
///   "message": "User Anton Havrylov created successfully!"
/// }
/// ```
pub async fn create_user(
    Validated(request): Validated<CreateUserRequest>,
) -> Json<MessageResponse> {
    info!(email = %safe_email_log(&request.email), "User created");

    Json(MessageResponse {
        message: format!("User {} created successfully!", request.name),
    })
}
