//! # jsonapi-lint
//!
//! A structural validator for json-api documents that accumulates ALL
//! validation errors, providing comprehensive feedback rather than
//! short-circuiting on the first failure.
//!
//! ## Overview
//!
//! Unlike validators that stop at the first problem, jsonapi-lint walks
//! the entire document (top-level members, the `jsonapi`, `meta`, and
//! `links` objects, resources with their attributes and relationships,
//! and the references between them) and reports everything wrong with
//! it at once. Violations split into errors and warnings: errors fail
//! the run, warnings are logged and dropped. Schema knowledge (which
//! types exist, which fields they carry, what their relationships point
//! at) comes from a [`SchemaProvider`] supplied at construction time.
//!
//! ## Core Types
//!
//! - [`Validator`]: the configured entry point for validating documents, resources, and references
//! - [`SchemaRegistry`]: a thread-safe, in-memory [`SchemaProvider`]
//! - [`ResourceSchema`]: attributes, relationships, and inheritance for one resource type
//! - [`Issues`]: the collector separating errors from warnings during a run
//! - [`ValidationError`]: one error from the taxonomy, or a [`MultipleErrors`] aggregate
//! - [`DocumentPath`]: the location in the document where a problem was found
//!
//! ## Example
//!
//! ```rust
//! use jsonapi_lint::{ResourceSchema, SchemaRegistry, Validator};
//! use serde_json::json;
//!
//! let registry = SchemaRegistry::new();
//! registry
//!     .register(ResourceSchema::new("article").attr("title"))
//!     .unwrap();
//! let validator = Validator::builder(registry).build();
//!
//! // A conforming document passes.
//! let document = json!({
//!     "data": { "id": "1", "type": "article", "attributes": { "title": "hi" } }
//! });
//! assert!(validator.validate_document(&document).is_ok());
//!
//! // A malformed one reports every problem in a single error.
//! let document = json!({ "data": null, "extra": true });
//! let error = validator.validate_document(&document).unwrap_err();
//! assert_eq!(error.errors().len(), 2);
//! ```

pub mod error;
pub mod format;
pub mod issues;
pub mod members;
pub mod path;
pub mod registry;
pub mod schema;
pub mod validator;

mod coalesce;
mod resource;
mod rules;

pub use coalesce::coalesce;
pub use error::{
    AttributeError, AttributeErrorKind, DocumentError, DocumentErrorKind, LinksError,
    LinksErrorKind, MetaError, MetaErrorKind, MultipleErrors, ReferenceError, ReferenceErrorKind,
    RelationshipError, RelationshipErrorKind, ResourceError, ResourceErrorKind, ValidationError,
};
pub use issues::Issues;
pub use path::{DocumentPath, PathSegment};
pub use registry::{RegistryError, SchemaRegistry};
pub use schema::{
    RelationshipDef, RelationshipKind, RelationshipLookup, ResourceSchema, SchemaProvider,
};
pub use validator::{
    MetaOnlyDocuments, MetaOnlyRelationships, ValidationResult, Validator, ValidatorBuilder,
};
