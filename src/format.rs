//! Type and member format utilities.
//!
//! JSON:API resource types travel in dasherized form (`flying-dog`), while
//! host-side member names are usually camelized (`flyingDog`). This module
//! provides the pure string transforms the validator and its hosts share:
//! [`dasherize`], [`camelize`], [`singularize`], [`normalize_type`], the
//! `is_*` format predicates built on them, and [`json_type_of`] for the
//! value-kind names used in error messages.

use std::collections::HashMap;
use std::sync::LazyLock;

use parking_lot::Mutex;
use regex::{Captures, Regex};
use serde_json::Value;

/// Matches an uppercase run (or a `/` namespace separator) as a case
/// boundary: the leading character plus any immediately following capitals.
static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z/])([A-Z]+)?").expect("case boundary pattern is valid"));

/// Process-scoped memo for [`dasherize`]. Type names repeat heavily across a
/// validation run, so results are cached for the lifetime of the process.
static DASHERIZE_CACHE: LazyLock<Mutex<HashMap<String, String>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Converts a camelized or namespaced name to its dasherized form.
///
/// Each case boundary becomes a dash and consecutive capitals collapse into
/// a single lowercase run; a leading capital takes no dash. The `/` namespace
/// separator is preserved. The transform is idempotent, so already-dasherized
/// input passes through unchanged.
///
/// # Example
///
/// ```rust
/// use jsonapi_lint::format::dasherize;
///
/// assert_eq!(dasherize("FlyingDog"), "flying-dog");
/// assert_eq!(dasherize("innerHTML"), "inner-html");
/// assert_eq!(dasherize("admin/UserSetting"), "admin/user-setting");
/// assert_eq!(dasherize("flying-dog"), "flying-dog");
/// ```
pub fn dasherize(name: &str) -> String {
    if let Some(cached) = DASHERIZE_CACHE.lock().get(name) {
        return cached.clone();
    }

    let dashed = CASE_BOUNDARY
        .replace_all(name, |caps: &Captures<'_>| {
            let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
            let lead = &caps[1];
            let run = caps.get(2).map(|m| m.as_str()).unwrap_or("");

            let mut piece = String::with_capacity(lead.len() + run.len() + 1);
            if start != 0 && lead.chars().all(|c| c.is_ascii_uppercase()) {
                piece.push('-');
            }
            piece.push_str(&lead.to_ascii_lowercase());
            piece.push_str(&run.to_ascii_lowercase());
            piece
        })
        .into_owned();

    DASHERIZE_CACHE
        .lock()
        .insert(name.to_string(), dashed.clone());
    dashed
}

/// Converts a dasherized, underscored, or spaced name to camelCase.
///
/// Separator runs are removed and the following character is uppercased; the
/// first character of the result is always lowercased.
///
/// # Example
///
/// ```rust
/// use jsonapi_lint::format::camelize;
///
/// assert_eq!(camelize("first-name"), "firstName");
/// assert_eq!(camelize("first_name"), "firstName");
/// assert_eq!(camelize("InnerHTML"), "innerHTML");
/// ```
pub fn camelize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.' | ' ') {
            upper_next = !out.is_empty();
            continue;
        }
        if out.is_empty() {
            out.extend(c.to_lowercase());
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Reduces a plural English word to its singular form.
///
/// This is a lightweight inflector covering the common resource-type shapes:
/// a short irregular table plus suffix rules (`ies` -> `y`, `xes`/`ches`/
/// `shes`/`sses`/`zes` -> drop `es`, trailing `s` dropped, `ss` kept). Hosts
/// with richer naming can swap the type formatter on the validator instead.
///
/// # Example
///
/// ```rust
/// use jsonapi_lint::format::singularize;
///
/// assert_eq!(singularize("pets"), "pet");
/// assert_eq!(singularize("puppies"), "puppy");
/// assert_eq!(singularize("people"), "person");
/// assert_eq!(singularize("boss"), "boss");
/// ```
pub fn singularize(name: &str) -> String {
    const IRREGULAR: [(&str, &str); 8] = [
        ("people", "person"),
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("geese", "goose"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
    ];

    for (plural, singular) in IRREGULAR {
        if name == plural {
            return singular.to_string();
        }
    }

    if name.len() > 3 && name.ends_with("ies") {
        let stem = &name[..name.len() - 3];
        return format!("{}y", stem);
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if name.ends_with(suffix) {
            return name[..name.len() - 2].to_string();
        }
    }
    if name.ends_with("ss") {
        return name.to_string();
    }
    if name.len() > 1 && name.ends_with('s') {
        return name[..name.len() - 1].to_string();
    }
    name.to_string()
}

/// Normalizes a resource type name: singularized and dasherized.
///
/// This is the default `format_type` strategy of the validator.
///
/// # Example
///
/// ```rust
/// use jsonapi_lint::format::normalize_type;
///
/// assert_eq!(normalize_type("FlyingDogs"), "flying-dog");
/// assert_eq!(normalize_type("person"), "person");
/// ```
pub fn normalize_type(name: &str) -> String {
    singularize(&dasherize(name))
}

/// Returns true if the name is already in dasherized form.
pub fn is_dasherized(name: &str) -> bool {
    dasherize(name) == name
}

/// Returns true if the name is already in camelCase form.
pub fn is_camel(name: &str) -> bool {
    camelize(name) == name
}

/// Returns true if the name is already a normalized resource type.
pub fn is_normalized_type(name: &str) -> bool {
    normalize_type(name) == name
}

/// Names the JSON kind of a value the way error messages spell it.
///
/// The capitalized `Null` and `Array` are part of the message contract.
pub fn json_type_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Array(_) => "Array",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dasherize_camel_case() {
        assert_eq!(dasherize("flyingDog"), "flying-dog");
        assert_eq!(dasherize("FlyingDog"), "flying-dog");
        assert_eq!(dasherize("person"), "person");
    }

    #[test]
    fn test_dasherize_collapses_capital_runs() {
        assert_eq!(dasherize("innerHTML"), "inner-html");
        assert_eq!(dasherize("ABCDef"), "abcdef");
    }

    #[test]
    fn test_dasherize_preserves_namespace_separator() {
        assert_eq!(dasherize("admin/UserSetting"), "admin/user-setting");
    }

    #[test]
    fn test_dasherize_is_idempotent() {
        for name in ["FlyingDog", "innerHTML", "admin/UserSetting", "already-done"] {
            let once = dasherize(name);
            assert_eq!(dasherize(&once), once, "dasherize({:?}) not idempotent", name);
        }
    }

    #[test]
    fn test_dasherize_is_memoized() {
        let first = dasherize("MemoizedExample");
        let second = dasherize("MemoizedExample");
        assert_eq!(first, second);
        assert!(DASHERIZE_CACHE.lock().contains_key("MemoizedExample"));
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("first-name"), "firstName");
        assert_eq!(camelize("first_name"), "firstName");
        assert_eq!(camelize("first name"), "firstName");
        assert_eq!(camelize("FirstName"), "firstName");
        assert_eq!(camelize("firstName"), "firstName");
    }

    #[test]
    fn test_singularize_suffix_rules() {
        assert_eq!(singularize("pets"), "pet");
        assert_eq!(singularize("puppies"), "puppy");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("classes"), "class");
        assert_eq!(singularize("dishes"), "dish");
        assert_eq!(singularize("churches"), "church");
        assert_eq!(singularize("boss"), "boss");
        assert_eq!(singularize("person"), "person");
    }

    #[test]
    fn test_singularize_irregulars() {
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("children"), "child");
        assert_eq!(singularize("mice"), "mouse");
    }

    #[test]
    fn test_normalize_type() {
        assert_eq!(normalize_type("FlyingDogs"), "flying-dog");
        assert_eq!(normalize_type("people"), "person");
        assert_eq!(normalize_type("pet"), "pet");
    }

    #[test]
    fn test_format_predicates() {
        assert!(is_dasherized("flying-dog"));
        assert!(!is_dasherized("FlyingDog"));
        assert!(is_camel("firstName"));
        assert!(!is_camel("first-name"));
        assert!(is_normalized_type("flying-dog"));
        assert!(!is_normalized_type("flying-dogs"));
    }

    #[test]
    fn test_json_type_of_names() {
        assert_eq!(json_type_of(&Value::Null), "Null");
        assert_eq!(json_type_of(&json!([])), "Array");
        assert_eq!(json_type_of(&json!(true)), "boolean");
        assert_eq!(json_type_of(&json!(4)), "number");
        assert_eq!(json_type_of(&json!("x")), "string");
        assert_eq!(json_type_of(&json!({})), "object");
    }
}
