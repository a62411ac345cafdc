//! Top-level member presence rules.
//!
//! These rules cover the membership constraints of a json-api document: at
//! least one of the mandatory members, no `data`/`errors` coexistence, no
//! members outside the specification, and `included` only alongside `data`.

use crate::error::DocumentError;
use crate::members::{member_present, member_present_and_not_null};
use crate::rules::ValidationContext;

/// Members at least one of which every document must carry.
const MANDATORY_MEMBERS: [&str; 3] = ["data", "meta", "errors"];

/// The complete member set the specification allows at the top level.
const KNOWN_MEMBERS: [&str; 6] = ["data", "meta", "errors", "jsonapi", "links", "included"];

/// Validates that the document is a JSON object.
///
/// Nothing else can be said about a non-object; a failure here stops the
/// pipeline.
pub(crate) fn document_exists(ctx: &mut ValidationContext<'_>) -> bool {
    if ctx.target.is_object() {
        return true;
    }

    ctx.issues
        .error(DocumentError::invalid_document(ctx.document, &ctx.path));
    false
}

/// Validates that at least one of `data`, `meta` and `errors` is present.
pub(crate) fn has_at_least_one(ctx: &mut ValidationContext<'_>) -> bool {
    if MANDATORY_MEMBERS
        .iter()
        .any(|key| member_present(ctx.target, key))
    {
        return true;
    }

    ctx.issues.error(DocumentError::missing_mandatory_member(
        ctx.document,
        &ctx.path,
        &MANDATORY_MEMBERS,
    ));
    false
}

/// Validates that at least one of `data`, `meta` and `errors` is present and
/// non-null. Runs even when [`has_at_least_one`] already failed; an empty
/// document violates both.
pub(crate) fn has_at_least_one_non_null(ctx: &mut ValidationContext<'_>) -> bool {
    if MANDATORY_MEMBERS
        .iter()
        .any(|key| member_present_and_not_null(ctx.target, key))
    {
        return true;
    }

    ctx.issues.error(DocumentError::null_mandatory_member(
        ctx.document,
        &ctx.path,
        &MANDATORY_MEMBERS,
    ));
    false
}

/// Validates that `data` and `errors` do not coexist. Presence counts even
/// when either holds null.
pub(crate) fn cant_have_both(ctx: &mut ValidationContext<'_>) -> bool {
    if member_present(ctx.target, "data") && member_present(ctx.target, "errors") {
        ctx.issues
            .error(DocumentError::disallowed_data_member(ctx.document, &ctx.path));
        return false;
    }

    true
}

/// Validates that every top-level member is one the specification names.
/// Unknown members are errors in strict mode and warnings otherwise.
pub(crate) fn has_no_unknown_members(ctx: &mut ValidationContext<'_>) -> bool {
    let Some(object) = ctx.target.as_object() else {
        return true;
    };

    let mut clean = true;
    for key in object.keys() {
        if !KNOWN_MEMBERS.contains(&key.as_str()) {
            let issue = DocumentError::unknown_member(ctx.document, &ctx.path, key);
            ctx.issues.strict(ctx.validator.strict_mode(), issue);
            clean = false;
        }
    }

    clean
}

/// Validates that `included` only appears alongside `data`.
pub(crate) fn included_requires_data(ctx: &mut ValidationContext<'_>) -> bool {
    if member_present(ctx.target, "included") && !member_present(ctx.target, "data") {
        ctx.issues.error(DocumentError::disallowed_included_member(
            ctx.document,
            &ctx.path,
        ));
        return false;
    }

    true
}
