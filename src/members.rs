//! Member presence helpers for JSON objects.
//!
//! JSON has no `undefined`, so "present" means the key exists on the object;
//! a member holding `null` is still present. The non-null variant is what the
//! document rules use when a member must actually carry data.

use serde_json::Value;

/// Returns true if `value` is an object carrying `member` as a key.
///
/// # Example
///
/// ```rust
/// use jsonapi_lint::members::member_present;
/// use serde_json::json;
///
/// assert!(member_present(&json!({"data": null}), "data"));
/// assert!(!member_present(&json!({"data": null}), "meta"));
/// assert!(!member_present(&json!(null), "data"));
/// ```
pub fn member_present(value: &Value, member: &str) -> bool {
    value
        .as_object()
        .map_or(false, |object| object.contains_key(member))
}

/// Returns true if `value` is an object carrying `member` with a non-null value.
pub fn member_present_and_not_null(value: &Value, member: &str) -> bool {
    value
        .as_object()
        .and_then(|object| object.get(member))
        .map_or(false, |member_value| !member_value.is_null())
}
