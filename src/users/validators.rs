// src/users/validators.rs

use regex::Regex;
use std::sync::LazyLock;

use super::models::CreateUserRequest;
use crate::common::{ValidationResult, Validator};

pub const NAME_MAX_CHARS: usize = 100;

/// local-part "@" domain, domain of two or more non-empty dot-separated labels, no whitespace
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern compiles")
});

// ============================================================================
// User Validators
// ============================================================================

pub struct CreateUserValidator;

impl Validator<CreateUserRequest> for CreateUserValidator {
    fn validate(&self, data: &CreateUserRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        // Both name rules run independently
        if data.name.trim().is_empty() {
            result.add_error("Name", "Name is required.");
        }
        if data.name.chars().count() > NAME_MAX_CHARS {
            result.add_error("Name", "Name cannot exceed 100 characters.");
        }

        if data.email.trim().is_empty() {
            result.add_error("Email", "Email is required.");
        } else if !is_valid_email(&data.email) {
            result.add_error("Email", "A valid email address is required.");
        }

        result
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
