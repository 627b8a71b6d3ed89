// Common validation types and traits

use serde::Serialize;
use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Violation messages keyed by field name.
///
/// A field only appears once at least one rule has failed for it, so an empty
/// result means the checked value is valid.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a result holding a single violation
    pub fn single(field: &str, message: &str) -> Self {
        let mut result = Self::new();
        result.add_error(field, message);
        result
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for `field`, in the order the rules ran
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }
}

/// Rule set for one request shape
pub trait Validator<T>: Send + Sync {
    fn validate(&self, data: &T) -> ValidationResult;
}

/// Validators registered per request type.
///
/// Built once at startup and shared read-only between requests.
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `validator` for requests of type `T`, replacing any previous one
    pub fn register<T, V>(&mut self, validator: V) -> &mut Self
    where
        T: 'static,
        V: Validator<T> + 'static,
    {
        let validator: Arc<dyn Validator<T>> = Arc::new(validator);
        self.validators
            .insert(TypeId::of::<T>(), Box::new(validator));
        self
    }

    pub fn get<T: 'static>(&self) -> Option<Arc<dyn Validator<T>>> {
        self.validators
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn Validator<T>>>())
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
