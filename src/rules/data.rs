//! Primary data and `included` rules.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{DocumentError, ResourceError};
use crate::rules::ValidationContext;

/// Reserved slot for structural checks on the primary `data` payload.
///
/// Resource validation is schema-aware and runs through
/// [`Validator::check_resource`](crate::Validator::check_resource) rather
/// than the document pipeline, so this rule accepts everything; it keeps a
/// stable position in the rule order for a future structural check.
pub(crate) fn data_is_valid(_ctx: &mut ValidationContext<'_>) -> bool {
    true
}

/// Validates the `included` member: when present it must be an array of
/// resource-shaped objects, and each included resource should be referenced
/// by the primary data or another included resource.
///
/// The linkage check only warns. Sparse fieldsets legitimately omit the
/// relationship that justifies an included resource, so an orphan is
/// suspicious rather than wrong.
pub(crate) fn included_is_valid(ctx: &mut ValidationContext<'_>) -> bool {
    let Some(included) = ctx.target.get("included") else {
        return true;
    };

    let Some(entries) = included.as_array() else {
        ctx.issues.error(DocumentError::invalid_included_value(
            ctx.document,
            &ctx.path,
            included,
        ));
        return false;
    };

    let referenced = collect_references(ctx.target);
    let included_path = ctx.path.push_member("included");
    let mut clean = true;

    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            ctx.issues
                .error(ResourceError::invalid(&included_path.push_index(index), entry));
            clean = false;
            continue;
        }

        // linkage is only checkable once the entry names itself
        let identity = entry
            .get("type")
            .and_then(Value::as_str)
            .zip(entry.get("id").and_then(Value::as_str));
        if let Some((type_name, id)) = identity {
            if !referenced.contains(&(type_name.to_string(), id.to_string())) {
                ctx.issues.warning(DocumentError::unlinked_included_resource(
                    ctx.document,
                    &included_path.push_index(index),
                    type_name,
                    id,
                ));
            }
        }
    }

    clean
}

/// Gathers every `(type, id)` pair referenced by relationship data anywhere
/// in the document: from the primary data and from the included resources
/// themselves, which may link each other.
fn collect_references(document: &Value) -> HashSet<(String, String)> {
    let mut referenced = HashSet::new();

    match document.get("data") {
        Some(Value::Array(resources)) => {
            for resource in resources {
                collect_resource_references(resource, &mut referenced);
            }
        }
        Some(resource) => collect_resource_references(resource, &mut referenced),
        None => {}
    }

    if let Some(Value::Array(entries)) = document.get("included") {
        for entry in entries {
            collect_resource_references(entry, &mut referenced);
        }
    }

    referenced
}

fn collect_resource_references(resource: &Value, referenced: &mut HashSet<(String, String)>) {
    let Some(relationships) = resource.get("relationships").and_then(Value::as_object) else {
        return;
    };

    for relationship in relationships.values() {
        match relationship.get("data") {
            Some(Value::Array(references)) => {
                for reference in references {
                    collect_reference(reference, referenced);
                }
            }
            Some(reference) => collect_reference(reference, referenced),
            None => {}
        }
    }
}

fn collect_reference(reference: &Value, referenced: &mut HashSet<(String, String)>) {
    if let (Some(type_name), Some(id)) = (
        reference.get("type").and_then(Value::as_str),
        reference.get("id").and_then(Value::as_str),
    ) {
        referenced.insert((type_name.to_string(), id.to_string()));
    }
}
