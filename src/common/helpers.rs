// Helper functions for safe logging and serialization

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```ignore
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.contains('@') => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***@***.***".to_string(),
    }
}

/// Replaces every string under an `email` key with its masked form
pub fn mask_emails(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, field) in map.iter_mut() {
                match field {
                    Value::String(email) if key.eq_ignore_ascii_case("email") => {
                        *email = safe_email_log(email);
                    }
                    other => mask_emails(other),
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask_emails),
        _ => {}
    }
}

/// Deserializes a JSON `null` as an empty string so that it reaches the
/// validator instead of failing to bind
pub fn null_as_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
