//! Request validation filter
//!
//! Gates handler execution on two ordered steps: the body must bind to the
//! expected request type, and the bound value must pass the validator
//! registered for that type. Either step can end the request with an
//! [`ApiError`]; otherwise control passes to the next stage.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::type_name;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

use super::validation::{Validator, ValidatorRegistry};
use super::{ApiError, AppState};

/// Validation gate for one request type.
///
/// Holds no per-request state, so a single instance can serve concurrent
/// requests.
pub struct ValidationFilter<T> {
    validator: Option<Arc<dyn Validator<T>>>,
}

impl<T> Clone for ValidationFilter<T> {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
        }
    }
}

impl<T: 'static> ValidationFilter<T> {
    /// Creates a filter; with no validator the rule check is skipped
    pub fn new(validator: Option<Arc<dyn Validator<T>>>) -> Self {
        Self { validator }
    }

    pub fn from_registry(registry: &ValidatorRegistry) -> Self {
        Self::new(registry.get::<T>())
    }

    /// Runs the binding and rule checks, returning the value the handler may use
    pub fn check(&self, bound: Option<T>) -> Result<T, ApiError> {
        let data = Self::require_bound(bound)?;
        self.apply_rules(&data)?;
        Ok(data)
    }

    /// Runs the full chain, calling `next` only when both checks pass
    pub async fn invoke<F, Fut, R>(&self, bound: Option<T>, next: F) -> Result<R, ApiError>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        let data = self.check(bound)?;
        Ok(next(data).await)
    }

    fn require_bound(bound: Option<T>) -> Result<T, ApiError> {
        bound.ok_or_else(|| {
            debug!(
                request_type = type_name::<T>(),
                "Request body missing or not bindable"
            );
            ApiError::BindingError
        })
    }

    fn apply_rules(&self, data: &T) -> Result<(), ApiError> {
        let Some(validator) = &self.validator else {
            warn!(
                request_type = type_name::<T>(),
                "No validator registered, skipping rule check"
            );
            return Ok(());
        };

        let result = validator.validate(data);
        if result.is_valid() {
            return Ok(());
        }

        let fields: Vec<&str> = result.fields().collect();
        debug!(
            request_type = type_name::<T>(),
            fields = ?fields,
            "Request failed validation"
        );
        Err(result.into())
    }
}

/// Extractor yielding a request body that bound and passed validation.
///
/// ```rust,ignore
/// pub async fn create_user(
///     Validated(request): Validated<CreateUserRequest>,
/// ) -> Json<MessageResponse> { ... }
/// ```
#[derive(Debug)]
pub struct Validated<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = req
            .extensions()
            .get::<Arc<AppState>>()
            .cloned()
            .ok_or_else(|| ApiError::InternalServer("missing app state".to_string()))?;

        let bound = match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => bind_object(value),
            Err(rejection) => {
                debug!(reason = %rejection.body_text(), "JSON body rejected");
                None
            }
        };

        ValidationFilter::<T>::from_registry(&app_state.validators)
            .check(bound)
            .map(Validated)
    }
}

/// Binds a JSON object to `T`; any other JSON shape counts as unbindable
fn bind_object<T: DeserializeOwned>(value: Value) -> Option<T> {
    if !value.is_object() {
        debug!(
            request_type = type_name::<T>(),
            "JSON body is not an object"
        );
        return None;
    }

    serde_json::from_value(value)
        .map_err(|e| debug!(error = %e, "JSON body does not match request shape"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ValidationResult;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, PartialEq, Deserialize)]
    struct Ping {
        label: String,
    }

    struct PingValidator;

    impl Validator<Ping> for PingValidator {
        fn validate(&self, data: &Ping) -> ValidationResult {
            let mut result = ValidationResult::new();
            if data.label.is_empty() {
                result.add_error("Label", "Label is required.");
            }
            result
        }
    }

    fn ping(label: &str) -> Ping {
        Ping {
            label: label.to_string(),
        }
    }

    fn filter() -> ValidationFilter<Ping> {
        let mut registry = ValidatorRegistry::new();
        registry.register::<Ping, _>(PingValidator);
        ValidationFilter::from_registry(&registry)
    }

    #[test]
    fn test_missing_value_is_binding_error() {
        let result = filter().check(None);
        assert!(matches!(result, Err(ApiError::BindingError)));
    }

    #[test]
    fn test_binding_error_wins_even_without_validator() {
        let result = ValidationFilter::<Ping>::new(None).check(None);
        assert!(matches!(result, Err(ApiError::BindingError)));
    }

    #[test]
    fn test_rule_failure_returns_validator_result() {
        match filter().check(Some(ping(""))) {
            Err(ApiError::ValidationError(result)) => {
                assert_eq!(
                    result.messages("Label"),
                    Some(&["Label is required.".to_string()][..])
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_value_passes_through_unchanged() {
        let data = filter().check(Some(ping("hello"))).unwrap();
        assert_eq!(data, ping("hello"));
    }

    #[test]
    fn test_absent_validator_skips_rule_check() {
        let filter = ValidationFilter::<Ping>::from_registry(&ValidatorRegistry::new());
        assert_eq!(filter.check(Some(ping(""))).unwrap(), ping(""));
    }

    #[tokio::test]
    async fn test_invoke_runs_next_stage_on_success() {
        let calls = AtomicUsize::new(0);
        let result = filter()
            .invoke(Some(ping("hello")), |data| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { format!("handled {}", data.label) }
            })
            .await
            .unwrap();

        assert_eq!(result, "handled hello");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invoke_short_circuits_before_next_stage() {
        let calls = AtomicUsize::new(0);

        for bound in [None, Some(ping(""))] {
            let result = filter()
                .invoke(bound, |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    async {}
                })
                .await;
            assert!(result.is_err());
        }

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_bind_object_accepts_matching_object() {
        let bound: Option<Ping> = bind_object(json!({ "label": "hello" }));
        assert_eq!(bound, Some(ping("hello")));
    }

    #[test]
    fn test_bind_object_rejects_non_objects() {
        for value in [
            json!(["hello"]),
            json!([]),
            json!("hello"),
            json!(7),
            json!(null),
        ] {
            assert!(bind_object::<Ping>(value.clone()).is_none(), "value {}", value);
        }
    }

    #[test]
    fn test_bind_object_rejects_mismatched_fields() {
        assert!(bind_object::<Ping>(json!({ "label": 3 })).is_none());
        assert!(bind_object::<Ping>(json!({})).is_none());
    }
}
