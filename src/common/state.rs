// Application state shared across all modules

use super::validation::ValidatorRegistry;

/// Application state handed to every request through an `Extension`.
///
/// Immutable after startup, so it is shared behind an `Arc` without a lock.
pub struct AppState {
    pub validators: ValidatorRegistry,
}

impl AppState {
    pub fn new(validators: ValidatorRegistry) -> Self {
        Self { validators }
    }
}
