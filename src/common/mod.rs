// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod filter;
pub mod helpers;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use filter::{Validated, ValidationFilter};
pub use helpers::{null_as_empty_string, safe_email_log};
pub use state::AppState;
pub use validation::{ValidationResult, Validator, ValidatorRegistry};
