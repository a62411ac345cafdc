//! Pure rendering helpers for validation error messages.
//!
//! Errors store structured fields and render lazily through `Display`; the
//! functions here turn those fields into the human-oriented parts of the
//! message. The location excerpt comes in three styles:
//!
//! - **object**: the whole offending document with a `---^` marker, used by
//!   the document-level error families.
//! - **key**: the path rendered as nested braces with a dashed caret under
//!   the offending key, used when the key itself is wrong.
//! - **value**: like key, with the caret advanced past `key: ` so it points
//!   at the value.
//!
//! Given the same error fields the output is byte-for-byte deterministic.

use serde_json::Value;

use crate::path::DocumentPath;

/// Joins member names as a backticked list with `or` before the last entry,
/// the way the mandatory-member messages spell their candidates:
/// `` `data`, `meta` or `errors` ``.
pub(crate) fn oxford_list(members: &[&str]) -> String {
    match members {
        [] => String::new(),
        [only] => format!("`{}`", only),
        [init @ .., last] => {
            let init = init
                .iter()
                .map(|member| format!("`{}`", member))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} or `{}`", init, last)
        }
    }
}

/// Renders a value the way messages embed it: strings bare (the caller adds
/// quoting where the message wants it), everything else as compact JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Renders a value for an excerpt line: strings single-quoted, everything
/// else as compact JSON.
fn excerpt_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}

fn pad_left(text: &str, count: usize, pad: char) -> String {
    let mut out = String::with_capacity(count + text.len());
    for _ in 0..count {
        out.push(pad);
    }
    out.push_str(text);
    out
}

/// Object-style excerpt: the offending document on its own line with a fixed
/// `---^` marker beneath it.
pub(crate) fn object_excerpt(document: &Value) -> String {
    format!("\n\n\t{}\n{}\n\n", display_value(document), pad_left("^", 3, '-'))
}

/// Key-style excerpt: nested braces down the path, then the offending key
/// and its value, with the caret's dash run stopping under the key.
pub(crate) fn key_excerpt(path: &DocumentPath, key: &str, value: &Value) -> String {
    braced_excerpt(path, key, value, 0)
}

/// Value-style excerpt: as [`key_excerpt`], with the caret advanced past
/// `key: ` to sit under the value.
pub(crate) fn value_excerpt(path: &DocumentPath, key: &str, value: &Value) -> String {
    braced_excerpt(path, key, value, key.chars().count() + 2)
}

fn braced_excerpt(path: &DocumentPath, key: &str, value: &Value, marker_shift: usize) -> String {
    let mut message = String::from("\n\n\t{\n\t");
    let mut depth = 2;

    for part in path.excerpt_parts() {
        message.push_str(&pad_left(&part, depth, ' '));
        message.push_str(": {\n\t");
        depth += 2;
    }

    message.push_str(&pad_left(key, depth, ' '));
    message.push_str(": ");
    message.push_str(&excerpt_value(value));
    message.push_str("\n\t");
    message.push_str(&pad_left("^", depth + marker_shift, '-'));
    message.push_str("\n\n");
    message
}
