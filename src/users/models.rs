//! User request and response models

use serde::{Deserialize, Serialize};

use crate::common::null_as_empty_string;

/// Body of `POST /users`.
///
/// Missing or `null` fields bind to an empty string and are reported by the
/// validator, not as a binding failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
