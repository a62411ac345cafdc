//! The `jsonapi` member rule.

use crate::error::DocumentError;
use crate::rules::meta::object_meta;
use crate::rules::ValidationContext;

/// Validates the `jsonapi` member: when present it must be an object carrying
/// a non-empty string `version`, optionally a `meta` object, and nothing
/// else.
///
/// The specification tolerates an empty `jsonapi` object; we are stricter
/// and expect it to carry information when it is present at all.
pub(crate) fn jsonapi_member(ctx: &mut ValidationContext<'_>) -> bool {
    let Some(jsonapi) = ctx.target.get("jsonapi") else {
        return true;
    };

    let Some(object) = jsonapi.as_object() else {
        ctx.issues.error(DocumentError::value_must_be_object(
            ctx.document,
            &ctx.path,
            "jsonapi",
            jsonapi,
        ));
        return false;
    };

    if !object.contains_key("version") {
        ctx.issues
            .error(DocumentError::missing_version(ctx.document, &ctx.path));
        return false;
    }

    let mut clean = true;
    for (key, value) in object {
        match key.as_str() {
            "version" => {
                let valid = value.as_str().is_some_and(|version| !version.is_empty());
                if !valid {
                    ctx.issues.error(DocumentError::version_must_be_string(
                        ctx.document,
                        &ctx.path,
                        value,
                    ));
                    clean = false;
                }
            }
            "meta" => {
                let path = ctx.path.push_member("jsonapi");
                clean &= object_meta(
                    ctx.document,
                    jsonapi,
                    &path,
                    ctx.validator.allow_empty_meta(),
                    ctx.issues,
                );
            }
            _ => {
                ctx.issues.error(DocumentError::unknown_jsonapi_member(
                    ctx.document,
                    &ctx.path,
                    key,
                ));
                clean = false;
            }
        }
    }

    clean
}
