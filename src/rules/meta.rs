//! The `meta` member rules.

use serde_json::Value;

use crate::error::MetaError;
use crate::issues::Issues;
use crate::members::{member_present, member_present_and_not_null};
use crate::path::DocumentPath;
use crate::rules::ValidationContext;
use crate::validator::MetaOnlyDocuments;

/// Siblings that keep a `meta` member from standing alone.
const META_SIBLINGS: [&str; 2] = ["data", "errors"];

/// Core check shared by the document and `jsonapi` rules: a `meta` member of
/// `owner`, when present, must be an object, and a non-empty one unless the
/// validator allows empty meta. `path` names the owner, not the member.
pub(crate) fn object_meta(
    document: &Value,
    owner: &Value,
    path: &DocumentPath,
    allow_empty: bool,
    issues: &mut Issues,
) -> bool {
    let Some(meta) = owner.get("meta") else {
        return true;
    };

    let Some(object) = meta.as_object() else {
        issues.error(MetaError::value_must_be_object(document, path, meta));
        return false;
    };

    if object.is_empty() && !allow_empty {
        issues.error(MetaError::must_not_be_empty(document, path));
        return false;
    }

    true
}

/// Validates the document's own `meta` member.
pub(crate) fn meta_member(ctx: &mut ValidationContext<'_>) -> bool {
    object_meta(
        ctx.document,
        ctx.target,
        &ctx.path,
        ctx.validator.allow_empty_meta(),
        ctx.issues,
    )
}

/// Validates that a `meta` member has at least one non-null sibling from
/// `data`/`errors`, per the validator's meta-only-document policy.
pub(crate) fn meta_requires_sibling(ctx: &mut ValidationContext<'_>) -> bool {
    let custom_message = match ctx.validator.meta_only_documents() {
        MetaOnlyDocuments::Allow => return true,
        MetaOnlyDocuments::Disallow => None,
        MetaOnlyDocuments::DisallowWithMessage(message) => Some(message.clone()),
    };

    if !member_present(ctx.target, "meta") {
        return true;
    }

    if META_SIBLINGS
        .iter()
        .any(|key| member_present_and_not_null(ctx.target, key))
    {
        return true;
    }

    let error = match custom_message {
        Some(message) => MetaError::solitary_meta_member_with_message(
            ctx.document,
            &ctx.path,
            &META_SIBLINGS,
            message,
        ),
        None => MetaError::solitary_meta_member(ctx.document, &ctx.path, &META_SIBLINGS),
    };
    ctx.issues.error(error);
    false
}
