//! The validator facade: configuration, construction, and the public
//! validation entry points.
//!
//! A [`Validator`] is built once from a [`SchemaProvider`] plus a handful
//! of policy knobs, then reused for any number of documents. Each call
//! walks the input, collects every issue it can find, and reduces the
//! collection through [`coalesce`](crate::coalesce()) into a single
//! `Result`.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::coalesce::coalesce;
use crate::error::{AttributeError, RelationshipError, ValidationError};
use crate::format::{is_camel, is_normalized_type, normalize_type};
use crate::issues::Issues;
use crate::path::DocumentPath;
use crate::resource;
use crate::rules::run_document_rules;
use crate::schema::{ResourceSchema, SchemaProvider};

/// Outcome of a validation pass: `Ok(())` or the coalesced error.
pub type ValidationResult = Result<(), ValidationError>;

/// Policy for documents whose only member is `meta`.
///
/// json-api allows meta-only documents, but consumers that require a
/// `data`, `errors`, or `links` payload can reject them, optionally with
/// a message of their own explaining what the endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MetaOnlyDocuments {
    /// Accept a document containing only `meta`.
    Allow,
    /// Reject with the standard message.
    #[default]
    Disallow,
    /// Reject, replacing the standard message with this one.
    DisallowWithMessage(String),
}

/// Policy for relationships whose only member is `meta`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetaOnlyRelationships {
    /// Accept a relationship containing only `meta`.
    Allow,
    /// Require `data` or `links` alongside it.
    #[default]
    Disallow,
}

/// A configured json-api document validator.
///
/// Construction goes through [`Validator::builder`]; the only required
/// input is a [`SchemaProvider`] describing the resource types the
/// consumer knows about. All validation methods take `&self` and share
/// no mutable state, so one validator can serve concurrent callers.
///
/// # Example
///
/// ```
/// use jsonapi_lint::{ResourceSchema, SchemaRegistry, Validator};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry
///     .register(ResourceSchema::new("article").attr("title"))
///     .unwrap();
/// let validator = Validator::builder(registry).build();
///
/// let document = json!({
///     "data": {
///         "id": "1",
///         "type": "article",
///         "attributes": { "title": "Ownership" }
///     }
/// });
/// assert!(validator.validate_document(&document).is_ok());
/// ```
#[derive(Clone)]
pub struct Validator {
    strict_mode: bool,
    allow_empty_meta: bool,
    meta_only_documents: MetaOnlyDocuments,
    meta_only_relationships: MetaOnlyRelationships,
    schemas: Arc<dyn SchemaProvider>,
    format_type: fn(&str) -> String,
    assert_type_format: fn(&str) -> bool,
    assert_member_format: fn(&str) -> bool,
}

impl Validator {
    /// Starts building a validator around the given schema provider.
    pub fn builder(provider: impl SchemaProvider + 'static) -> ValidatorBuilder {
        ValidatorBuilder {
            strict_mode: true,
            allow_empty_meta: false,
            meta_only_documents: MetaOnlyDocuments::default(),
            meta_only_relationships: MetaOnlyRelationships::default(),
            schemas: Arc::new(provider),
            format_type: normalize_type,
            assert_type_format: is_normalized_type,
            assert_member_format: is_camel,
        }
    }

    /// Validates a complete json-api document.
    ///
    /// Every applicable rule runs and every violation is collected before
    /// anything is returned, so a malformed document reports all of its
    /// problems in one pass. Warnings are logged and do not fail the
    /// call; errors come back as a single [`ValidationError`], which is
    /// an aggregate when there was more than one.
    pub fn validate_document(&self, document: &Value) -> ValidationResult {
        coalesce(self.check_document(document))
    }

    /// Runs the document rules and returns the raw collected issues
    /// without coalescing them, for callers that want to inspect
    /// warnings or report errors their own way.
    pub fn check_document(&self, document: &Value) -> Issues {
        let mut issues = Issues::new();
        run_document_rules(self, document, &mut issues);
        issues
    }

    /// Validates a single resource object against its schema.
    ///
    /// `path` names where the resource sits in its enclosing document
    /// and prefixes every reported location; use
    /// [`DocumentPath::document()`] for a standalone resource.
    pub fn validate_resource(&self, value: &Value, path: &DocumentPath) -> ValidationResult {
        coalesce(self.check_resource(value, path))
    }

    /// Resource counterpart of [`check_document`](Self::check_document).
    pub fn check_resource(&self, value: &Value, path: &DocumentPath) -> Issues {
        let mut issues = Issues::new();
        resource::check_resource(self, value, path, &mut issues);
        issues
    }

    /// Checks an attributes hash against `schema`, returning one error
    /// per unknown attribute (or a single error when the hash itself is
    /// not an object).
    pub fn validate_attributes(
        &self,
        schema: &ResourceSchema,
        attributes: &Value,
        path: &DocumentPath,
    ) -> Vec<AttributeError> {
        resource::check_attributes(self, schema, attributes, path)
    }

    /// Checks a relationships hash against `schema`: unknown names,
    /// malformed members, and references whose type does not satisfy the
    /// relationship's target.
    pub fn validate_relationships(
        &self,
        schema: &ResourceSchema,
        relationships: &Value,
        path: &DocumentPath,
    ) -> Vec<RelationshipError> {
        resource::check_relationships(self, schema, relationships, path)
    }

    /// Checks a resource reference (`type`, `id`, optional `meta`),
    /// pushing findings into `issues`. Returns `true` when clean.
    pub fn validate_reference(
        &self,
        reference: &Value,
        path: &DocumentPath,
        issues: &mut Issues,
    ) -> bool {
        resource::check_reference(self, reference, path, issues)
    }

    /// Whether recoverable mistakes are errors (`true`) or warnings.
    pub fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Whether an empty `meta` object is acceptable.
    pub fn allow_empty_meta(&self) -> bool {
        self.allow_empty_meta
    }

    /// The configured policy for meta-only documents.
    pub fn meta_only_documents(&self) -> &MetaOnlyDocuments {
        &self.meta_only_documents
    }

    /// The configured policy for meta-only relationships.
    pub fn meta_only_relationships(&self) -> MetaOnlyRelationships {
        self.meta_only_relationships
    }

    /// The schema provider this validator consults.
    pub fn provider(&self) -> &dyn SchemaProvider {
        self.schemas.as_ref()
    }

    /// Applies the configured type formatter to a raw type name.
    pub fn format_type(&self, type_name: &str) -> String {
        (self.format_type)(type_name)
    }

    /// Whether a type name is in the format this validator expects.
    pub fn assert_type_format(&self, type_name: &str) -> bool {
        (self.assert_type_format)(type_name)
    }

    /// Whether a member name is in the format this validator expects.
    pub fn assert_member_format(&self, member_name: &str) -> bool {
        (self.assert_member_format)(member_name)
    }

    /// Resolves a schema for a resource type: first under the formatted
    /// name, then under the provider's friendlier fallback name.
    pub(crate) fn lookup_schema(&self, type_name: &str) -> Option<ResourceSchema> {
        let formatted = (self.format_type)(type_name);
        if let Some(schema) = self.schemas.schema_for(&formatted) {
            return Some(schema);
        }
        let fallback = self.schemas.format_fallback_type(type_name);
        self.schemas.schema_for(&fallback)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("strict_mode", &self.strict_mode)
            .field("allow_empty_meta", &self.allow_empty_meta)
            .field("meta_only_documents", &self.meta_only_documents)
            .field("meta_only_relationships", &self.meta_only_relationships)
            .finish_non_exhaustive()
    }
}

// One validator is meant to be shared across threads.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator>();
    assert_sync::<Validator>();
};

/// Builder for [`Validator`]. Every knob has a default, so
/// `Validator::builder(provider).build()` is already a working strict
/// validator.
#[derive(Clone)]
pub struct ValidatorBuilder {
    strict_mode: bool,
    allow_empty_meta: bool,
    meta_only_documents: MetaOnlyDocuments,
    meta_only_relationships: MetaOnlyRelationships,
    schemas: Arc<dyn SchemaProvider>,
    format_type: fn(&str) -> String,
    assert_type_format: fn(&str) -> bool,
    assert_member_format: fn(&str) -> bool,
}

impl ValidatorBuilder {
    /// When strict mode is off, the recoverable mistakes become
    /// warnings instead of errors: unknown document members and unknown
    /// link members. Defaults to `true`; everything else always errors.
    pub fn strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    /// Accept `meta: {}` instead of requiring at least one member.
    /// Defaults to `false`.
    pub fn allow_empty_meta(mut self, allow: bool) -> Self {
        self.allow_empty_meta = allow;
        self
    }

    /// Sets the policy for documents whose only member is `meta`.
    pub fn meta_only_documents(mut self, policy: MetaOnlyDocuments) -> Self {
        self.meta_only_documents = policy;
        self
    }

    /// Sets the policy for relationships whose only member is `meta`.
    pub fn meta_only_relationships(mut self, policy: MetaOnlyRelationships) -> Self {
        self.meta_only_relationships = policy;
        self
    }

    /// Replaces the type formatter used before schema lookup. The
    /// default singularizes and dasherizes.
    pub fn format_type(mut self, format: fn(&str) -> String) -> Self {
        self.format_type = format;
        self
    }

    /// Replaces the predicate deciding whether a type name is well
    /// formed. The default requires singular dasherized names.
    pub fn assert_type_format(mut self, assert: fn(&str) -> bool) -> Self {
        self.assert_type_format = assert;
        self
    }

    /// Replaces the predicate deciding whether a member name is well
    /// formed. The default requires camelCase names.
    pub fn assert_member_format(mut self, assert: fn(&str) -> bool) -> Self {
        self.assert_member_format = assert;
        self
    }

    /// Finishes construction.
    pub fn build(self) -> Validator {
        Validator {
            strict_mode: self.strict_mode,
            allow_empty_meta: self.allow_empty_meta,
            meta_only_documents: self.meta_only_documents,
            meta_only_relationships: self.meta_only_relationships,
            schemas: self.schemas,
            format_type: self.format_type,
            assert_type_format: self.assert_type_format,
            assert_member_format: self.assert_member_format,
        }
    }
}

impl fmt::Debug for ValidatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("strict_mode", &self.strict_mode)
            .field("allow_empty_meta", &self.allow_empty_meta)
            .field("meta_only_documents", &self.meta_only_documents)
            .field("meta_only_relationships", &self.meta_only_relationships)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::registry::SchemaRegistry;

    fn registry() -> SchemaRegistry {
        let registry = SchemaRegistry::new();
        registry
            .register(ResourceSchema::new("article").attr("title"))
            .unwrap();
        registry
    }

    #[test]
    fn test_defaults() {
        let validator = Validator::builder(registry()).build();

        assert!(validator.strict_mode());
        assert!(!validator.allow_empty_meta());
        assert_eq!(validator.meta_only_documents(), &MetaOnlyDocuments::Disallow);
        assert_eq!(
            validator.meta_only_relationships(),
            MetaOnlyRelationships::Disallow
        );
    }

    #[test]
    fn test_validate_document_accepts_a_clean_document() {
        let validator = Validator::builder(registry()).build();
        let document = json!({
            "data": { "id": "1", "type": "article", "attributes": { "title": "hi" } }
        });

        assert!(validator.validate_document(&document).is_ok());
    }

    #[test]
    fn test_validate_document_returns_a_lone_error_directly() {
        let validator = Validator::builder(registry()).build();
        let document = json!({ "data": null });

        let Err(error) = validator.validate_document(&document) else {
            panic!("expected validation to fail");
        };
        assert!(!error.is_multiple());
        assert!(matches!(error, ValidationError::Document(_)));
    }

    #[test]
    fn test_validate_document_aggregates_several_errors() {
        let validator = Validator::builder(registry()).build();
        let document = json!({ "data": null, "random": true });

        // Two problems: null data with nothing else, and the unknown member.
        let Err(error) = validator.validate_document(&document) else {
            panic!("expected validation to fail");
        };
        assert!(error.is_multiple());
        assert_eq!(error.errors().len(), 2);
    }

    #[test]
    fn test_strict_mode_off_downgrades_unknown_members() {
        let validator = Validator::builder(registry()).strict_mode(false).build();
        let document = json!({ "data": null, "random": true });

        let issues = validator.check_document(&document);
        // The unknown member is a warning now; the null-data problem remains.
        assert_eq!(issues.warnings().len(), 1);
        assert_eq!(issues.errors().len(), 1);
    }

    #[test]
    fn test_check_document_exposes_raw_issues() {
        let validator = Validator::builder(registry()).build();
        let issues = validator.check_document(&json!({ "data": null }));

        assert!(issues.has_errors());
        assert!(issues.warnings().is_empty());
    }

    #[test]
    fn test_validate_resource_round_trip() {
        let validator = Validator::builder(registry()).build();
        let path = DocumentPath::document();

        let good = json!({ "id": "1", "type": "article", "attributes": {} });
        assert!(validator.validate_resource(&good, &path).is_ok());

        let bad = json!({ "id": "1", "type": "article" });
        assert!(validator.validate_resource(&bad, &path).is_err());
    }

    #[test]
    fn test_validate_reference_checks_against_schemas() {
        let validator = Validator::builder(registry()).build();
        let path = DocumentPath::document();

        let mut issues = Issues::new();
        assert!(validator.validate_reference(
            &json!({ "type": "article", "id": "1" }),
            &path,
            &mut issues
        ));
        assert!(issues.is_clean());

        let mut issues = Issues::new();
        assert!(!validator.validate_reference(
            &json!({ "type": "comet", "id": "1" }),
            &path,
            &mut issues
        ));
        assert!(issues.has_errors());
    }

    #[test]
    fn test_format_hooks_have_sensible_defaults() {
        let validator = Validator::builder(registry()).build();

        assert_eq!(validator.format_type("articles"), "article");
        assert!(validator.assert_type_format("article"));
        assert!(!validator.assert_type_format("articles"));
        assert!(validator.assert_member_format("firstName"));
        assert!(!validator.assert_member_format("first-name"));
    }

    #[test]
    fn test_custom_format_type_drives_schema_lookup() {
        fn alias(type_name: &str) -> String {
            if type_name == "posts" {
                "article".to_string()
            } else {
                type_name.to_string()
            }
        }

        let validator = Validator::builder(registry()).format_type(alias).build();
        let resource = json!({ "id": "1", "type": "posts", "attributes": { "title": "hi" } });

        assert!(validator
            .validate_resource(&resource, &DocumentPath::document())
            .is_ok());
    }

    #[test]
    fn test_fallback_lookup_rescues_oddly_named_schemas() {
        // Registered under a plural name, so the normalizing formatter
        // misses and only the dasherize fallback finds it.
        let registry = SchemaRegistry::new();
        registry
            .register(ResourceSchema::new("user-settings").attr("theme"))
            .unwrap();
        let validator = Validator::builder(registry).build();
        let path = DocumentPath::document();

        let issues = validator.check_resource(
            &json!({ "id": "1", "type": "userSettings", "attributes": { "theme": "dark" } }),
            &path,
        );
        // The undasherized type is the only complaint.
        assert_eq!(issues.errors().len(), 1);
    }

    #[test]
    fn test_validator_is_cheap_to_clone_and_share() {
        let validator = Validator::builder(registry()).build();
        let clone = validator.clone();

        let document = json!({
            "data": { "id": "1", "type": "article", "attributes": { "title": "hi" } }
        });
        assert!(clone.validate_document(&document).is_ok());
    }
}
