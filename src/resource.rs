//! Schema-aware validation of individual resources.
//!
//! A resource is checked in two passes. The structural pass looks only at
//! the shape of the object: which keys are present, and whether the
//! mandatory ones exist. The typed pass inspects the values of `id` and
//! `type`, resolves the resource's schema, and hands `attributes` and
//! `relationships` off to their dedicated checks. Both passes run even
//! when the first finds problems, so a malformed resource reports
//! everything wrong with it at once.

use serde_json::Value;

use crate::error::{AttributeError, ReferenceError, RelationshipError, ResourceError};
use crate::format::dasherize;
use crate::issues::Issues;
use crate::path::DocumentPath;
use crate::rules::object_meta;
use crate::schema::{RelationshipKind, RelationshipLookup, ResourceSchema};
use crate::validator::{MetaOnlyRelationships, Validator};

/// Keys a resource object may carry.
const RESOURCE_KEYS: [&str; 6] = ["id", "type", "attributes", "relationships", "links", "meta"];

/// Keys every resource object must carry.
const MANDATORY_RESOURCE_KEYS: [&str; 2] = ["id", "type"];

/// Beyond identity, a resource must carry at least one of these.
const SECONDARY_RESOURCE_KEYS: [&str; 2] = ["attributes", "relationships"];

/// Keys a resource reference may carry.
const REFERENCE_KEYS: [&str; 3] = ["type", "id", "meta"];

/// Checks a single resource object against its schema, pushing any
/// findings into `issues`. Returns `true` when the resource is clean.
///
/// `null`, arrays, and non-objects are rejected outright; everything
/// else gets the full structural and typed treatment.
pub(crate) fn check_resource(
    validator: &Validator,
    resource: &Value,
    path: &DocumentPath,
    issues: &mut Issues,
) -> bool {
    if resource.is_null() {
        issues.error(ResourceError::missing(path, resource));
        return false;
    }
    if resource.is_array() {
        issues.error(ResourceError::is_array(path));
        return false;
    }
    if !resource.is_object() {
        issues.error(ResourceError::invalid(path, resource));
        return false;
    }

    let mut clean = structural_check(resource, path, issues);
    clean &= typed_check(validator, resource, path, issues);
    clean
}

/// Shape-only checks: unexpected keys, missing identity keys, and the
/// attributes-or-relationships requirement. Values are not inspected.
fn structural_check(resource: &Value, path: &DocumentPath, issues: &mut Issues) -> bool {
    let Some(object) = resource.as_object() else {
        return false;
    };
    let mut clean = true;

    for (key, value) in object {
        if !RESOURCE_KEYS.contains(&key.as_str()) {
            issues.error(ResourceError::unexpected_key(path, key, value));
            clean = false;
        }
    }

    for key in MANDATORY_RESOURCE_KEYS {
        if !object.contains_key(key) {
            issues.error(ResourceError::missing_key(path, key));
            clean = false;
        }
    }

    if !SECONDARY_RESOURCE_KEYS.iter().any(|key| object.contains_key(*key)) {
        issues.error(ResourceError::missing_info(path, &SECONDARY_RESOURCE_KEYS));
        clean = false;
    }

    clean
}

/// Value checks: `id` and `type` must be non-empty strings, `type` must
/// be dasherized, and a schema must exist for it. Once a schema is in
/// hand, `attributes` and `relationships` are checked against it.
///
/// Without a usable `type` there is no schema to check against, so the
/// member checks are skipped rather than reported as unknown.
fn typed_check(
    validator: &Validator,
    resource: &Value,
    path: &DocumentPath,
    issues: &mut Issues,
) -> bool {
    let mut clean = true;

    let id = resource.get("id").unwrap_or(&Value::Null);
    if non_empty_str(id).is_none() {
        issues.error(ResourceError::invalid_id_value(path, id));
        clean = false;
    }

    let type_value = resource.get("type").unwrap_or(&Value::Null);
    let Some(type_name) = non_empty_str(type_value) else {
        issues.error(ResourceError::invalid_type_value(path, type_value));
        return false;
    };

    let dasherized = dasherize(type_name);
    if dasherized != type_name {
        issues.error(ResourceError::invalid_type_format(path, type_name, &dasherized));
        clean = false;
    }

    let Some(schema) = validator.lookup_schema(type_name) else {
        issues.error(ResourceError::unknown_schema(path, type_name));
        return false;
    };

    if let Some(attributes) = resource.get("attributes") {
        let errors = check_attributes(validator, &schema, attributes, path);
        clean &= errors.is_empty();
        for error in errors {
            issues.error(error);
        }
    }

    if let Some(relationships) = resource.get("relationships") {
        let errors = check_relationships(validator, &schema, relationships, path);
        clean &= errors.is_empty();
        for error in errors {
            issues.error(error);
        }
    }

    clean
}

/// Checks an attributes hash against `schema`: every key must be defined
/// on the schema or one of the schemas it inherits from.
pub(crate) fn check_attributes(
    validator: &Validator,
    schema: &ResourceSchema,
    attributes: &Value,
    resource_path: &DocumentPath,
) -> Vec<AttributeError> {
    let Some(object) = attributes.as_object() else {
        return vec![AttributeError::invalid_hash(resource_path, &schema.name, attributes)];
    };

    let attributes_path = resource_path.push_member("attributes");
    let mut errors = Vec::new();

    for (key, value) in object {
        if validator.provider().find_attribute(&schema.name, key).is_none() {
            errors.push(AttributeError::unknown_attribute(
                &attributes_path,
                &schema.name,
                key,
                value,
            ));
        }
    }

    errors
}

/// Checks a relationships hash against `schema`. Each named relationship
/// must exist on the schema (or an ancestor), its members must be well
/// formed, and its `data` must hold references whose types satisfy the
/// relationship's declared target.
pub(crate) fn check_relationships(
    validator: &Validator,
    schema: &ResourceSchema,
    relationships: &Value,
    resource_path: &DocumentPath,
) -> Vec<RelationshipError> {
    let Some(object) = relationships.as_object() else {
        return vec![RelationshipError::invalid_hash(
            resource_path,
            &schema.name,
            relationships,
        )];
    };

    let relationships_path = resource_path.push_member("relationships");
    let mut errors = Vec::new();

    for (key, relationship) in object {
        check_relationship(
            validator,
            schema,
            key,
            relationship,
            &relationships_path,
            &mut errors,
        );
    }

    errors
}

fn check_relationship(
    validator: &Validator,
    schema: &ResourceSchema,
    key: &str,
    relationship: &Value,
    relationships_path: &DocumentPath,
    errors: &mut Vec<RelationshipError>,
) {
    let Some(lookup) = validator.provider().find_relationship(&schema.name, key) else {
        errors.push(RelationshipError::unknown_relationship(
            relationships_path,
            &schema.name,
            key,
            relationship,
        ));
        return;
    };

    // An explicit null is an empty to-one relationship.
    if relationship.is_null() {
        return;
    }

    let Some(members) = relationship.as_object() else {
        errors.push(RelationshipError::invalid_relationship_value(
            relationships_path,
            &schema.name,
            key,
            relationship,
        ));
        return;
    };

    let relationship_path = relationships_path.push_member(key);

    for member in ["links", "meta"] {
        if let Some(value) = members.get(member) {
            if !value.is_object() && !value.is_null() {
                errors.push(RelationshipError::invalid_member_value(
                    &relationship_path,
                    &schema.name,
                    key,
                    member,
                    value,
                ));
            }
        }
    }

    if matches!(validator.meta_only_relationships(), MetaOnlyRelationships::Disallow)
        && members.contains_key("meta")
        && !members.contains_key("data")
        && !members.contains_key("links")
    {
        errors.push(RelationshipError::meta_only(
            &relationship_path,
            &schema.name,
            key,
            relationship,
        ));
    }

    let Some(data) = members.get("data") else {
        return;
    };

    if !data.is_object() && !data.is_array() && !data.is_null() {
        errors.push(RelationshipError::invalid_member_value(
            &relationship_path,
            &schema.name,
            key,
            "data",
            data,
        ));
        return;
    }

    if data.is_null() {
        return;
    }

    match lookup.kind {
        RelationshipKind::HasMany => {
            let Some(references) = data.as_array() else {
                errors.push(RelationshipError::invalid_to_many_data(
                    &relationship_path,
                    &schema.name,
                    key,
                    data,
                ));
                return;
            };
            let data_path = relationship_path.push_member("data");
            for (index, reference) in references.iter().enumerate() {
                relationship_reference_check(
                    validator,
                    &lookup,
                    &schema.name,
                    key,
                    reference,
                    &data_path.push_index(index),
                    errors,
                );
            }
        }
        RelationshipKind::BelongsTo => {
            if data.is_object() {
                relationship_reference_check(
                    validator,
                    &lookup,
                    &schema.name,
                    key,
                    data,
                    &relationship_path.push_member("data"),
                    errors,
                );
            } else {
                errors.push(RelationshipError::invalid_to_one_data(
                    &relationship_path,
                    &schema.name,
                    key,
                    data,
                ));
            }
        }
    }
}

/// Checks one reference inside a relationship's `data`. The reference
/// type is valid when it names the relationship's target schema or any
/// schema that target inherits from.
fn relationship_reference_check(
    validator: &Validator,
    lookup: &RelationshipLookup,
    type_name: &str,
    key: &str,
    reference: &Value,
    path: &DocumentPath,
    errors: &mut Vec<RelationshipError>,
) {
    let id = reference.get("id").unwrap_or(&Value::Null);
    if non_empty_str(id).is_none() {
        errors.push(RelationshipError::invalid_reference_id(path, type_name, key, id));
    }

    let type_value = reference.get("type").unwrap_or(&Value::Null);
    let Some(found) = non_empty_str(type_value) else {
        errors.push(RelationshipError::invalid_reference_type(
            path, type_name, key, type_value,
        ));
        return;
    };

    let dasherized = dasherize(found);
    if dasherized != found {
        errors.push(RelationshipError::unformatted_reference_type(
            path, type_name, key, found, &dasherized,
        ));
    }

    if !validator.provider().schema_implements(&lookup.target, &dasherized) {
        errors.push(RelationshipError::mismatched_type(path, type_name, key, type_value));
    }
}

/// Checks a standalone resource reference: an object of `type`, `id`,
/// and optionally `meta`, where `type` must name a known schema.
/// Findings go into `issues`; returns `true` when the reference is clean.
pub(crate) fn check_reference(
    validator: &Validator,
    reference: &Value,
    path: &DocumentPath,
    issues: &mut Issues,
) -> bool {
    let Some(object) = reference.as_object() else {
        issues.error(ReferenceError::invalid(path, reference));
        return false;
    };

    let mut clean = true;

    for (key, value) in object {
        if !REFERENCE_KEYS.contains(&key.as_str()) {
            issues.error(ReferenceError::unexpected_key(path, key, value));
            clean = false;
        }
    }

    let id = object.get("id").unwrap_or(&Value::Null);
    if non_empty_str(id).is_none() {
        issues.error(ReferenceError::invalid_id_value(path, id));
        clean = false;
    }

    let type_value = object.get("type").unwrap_or(&Value::Null);
    match non_empty_str(type_value) {
        None => {
            issues.error(ReferenceError::invalid_type_value(path, type_value));
            clean = false;
        }
        Some(type_name) => {
            let dasherized = dasherize(type_name);
            if dasherized != type_name {
                issues.error(ReferenceError::invalid_type_format(path, type_name, &dasherized));
                clean = false;
            }
            if validator.lookup_schema(type_name).is_none() {
                issues.error(ReferenceError::unknown_schema(path, type_name));
                clean = false;
            }
        }
    }

    clean &= object_meta(reference, reference, path, validator.allow_empty_meta(), issues);

    clean
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|text| !text.is_empty())
}
