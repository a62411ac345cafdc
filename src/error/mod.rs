//! Error types for validation failures.
//!
//! This module provides one typed family per validated sub-domain (document,
//! meta, links, resource, reference, relationship, attribute), the unifying
//! [`ValidationError`] enum, and the [`MultipleErrors`] aggregate used when a
//! run detects several violations at once. Each family carries structured
//! context (kind, path, offending value) and renders a human-readable message
//! with a pretty-printed location excerpt.

mod document;
mod render;
mod resource;
mod validation_error;

pub use document::{
    DocumentError, DocumentErrorKind, LinksError, LinksErrorKind, MetaError, MetaErrorKind,
};
pub use resource::{
    AttributeError, AttributeErrorKind, ReferenceError, ReferenceErrorKind, RelationshipError,
    RelationshipErrorKind, ResourceError, ResourceErrorKind,
};
pub use validation_error::{MultipleErrors, ValidationError};
