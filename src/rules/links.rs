//! The `links` member rule.
//!
//! A top-level links object may carry `self`, `related` and the four
//! pagination members (`first`, `last`, `prev`, `next`). Each check here is
//! independent, so one malformed member never hides another.

use serde_json::Value;

use crate::error::LinksError;
use crate::rules::ValidationContext;

/// The complete member set a top-level links object may carry.
const LINK_MEMBERS: [&str; 6] = ["self", "related", "first", "last", "prev", "next"];

/// Pagination members come as a set: once one appears, each of the four must
/// be present, with null marking an unavailable page.
const PAGINATION_MEMBERS: [&str; 4] = ["first", "last", "prev", "next"];

/// Validates the `links` member.
pub(crate) fn links_member(ctx: &mut ValidationContext<'_>) -> bool {
    let Some(links) = ctx.target.get("links") else {
        return true;
    };

    let Some(object) = links.as_object() else {
        ctx.issues.error(LinksError::value_must_be_object(
            ctx.document,
            &ctx.path,
            links,
        ));
        return false;
    };

    if object.is_empty() {
        ctx.issues
            .error(LinksError::must_not_be_empty(ctx.document, &ctx.path));
        return false;
    }

    let mut clean = true;

    if let Some(self_link) = object.get("self") {
        if !is_link_value(self_link) {
            ctx.issues
                .error(LinksError::invalid_self(ctx.document, &ctx.path, self_link));
            clean = false;
        }
    }

    if let Some(related) = object.get("related") {
        if !is_link_value(related) {
            ctx.issues
                .error(LinksError::invalid_related(ctx.document, &ctx.path, related));
            clean = false;
        }
    }

    if PAGINATION_MEMBERS
        .iter()
        .any(|key| object.contains_key(*key))
    {
        for key in PAGINATION_MEMBERS {
            match object.get(key) {
                Some(link) if link.is_null() || is_link_value(link) => {}
                Some(link) => {
                    ctx.issues.error(LinksError::invalid_pagination(
                        ctx.document,
                        &ctx.path,
                        key,
                        Some(link),
                    ));
                    clean = false;
                }
                None => {
                    ctx.issues.error(LinksError::invalid_pagination(
                        ctx.document,
                        &ctx.path,
                        key,
                        None,
                    ));
                    clean = false;
                }
            }
        }
    }

    for key in object.keys() {
        if !LINK_MEMBERS.contains(&key.as_str()) {
            let issue = LinksError::unknown_member(ctx.document, &ctx.path, key);
            ctx.issues.strict(ctx.validator.strict_mode(), issue);
            clean = false;
        }
    }

    clean
}

/// A link value is a string URL or a link object whose `href`, when present,
/// is a string.
fn is_link_value(value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        Value::Object(object) => object.get("href").map_or(true, Value::is_string),
        _ => false,
    }
}
