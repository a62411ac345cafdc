//! The unified validation error and the multi-error aggregate.
//!
//! Every family of violation folds into [`ValidationError`], which is the type
//! the validator ultimately returns. When a run detects two or more
//! violations they are folded into a single [`MultipleErrors`] aggregate so
//! callers always handle exactly one error value without losing the itemized
//! detail.

use std::fmt::{self, Display};

use crate::error::{
    AttributeError, DocumentError, LinksError, MetaError, ReferenceError, RelationshipError,
    ResourceError,
};

/// Any violation the validator can report.
///
/// Variants are namespaced by the part of the document they concern. The
/// [`Multiple`](ValidationError::Multiple) variant aggregates two or more
/// violations from a single run; [`ValidationError::errors`] gives a uniform
/// itemized view over both shapes.
///
/// # Example
///
/// ```rust
/// use jsonapi_lint::{DocumentError, DocumentPath, ValidationError};
/// use serde_json::Value;
///
/// let error: ValidationError =
///     DocumentError::invalid_document(&Value::Null, &DocumentPath::document()).into();
///
/// assert_eq!(error.errors().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Top-level document structure violation.
    Document(DocumentError),
    /// `meta` member violation.
    Meta(MetaError),
    /// `links` member violation.
    Links(LinksError),
    /// Resource object violation.
    Resource(ResourceError),
    /// Resource identifier violation.
    Reference(ReferenceError),
    /// Relationships hash violation.
    Relationship(RelationshipError),
    /// Attributes hash violation.
    Attribute(AttributeError),
    /// Two or more violations from a single run.
    Multiple(MultipleErrors),
}

impl ValidationError {
    /// An itemized view of this error.
    ///
    /// Returns the ordered constituent list for a
    /// [`Multiple`](ValidationError::Multiple) aggregate, and a one-element
    /// slice containing this error itself for every other variant.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationError::Multiple(multiple) => multiple.errors(),
            other => std::slice::from_ref(other),
        }
    }

    /// Returns true when this error aggregates several violations.
    pub fn is_multiple(&self) -> bool {
        matches!(self, ValidationError::Multiple(_))
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Document(error) => error.fmt(f),
            ValidationError::Meta(error) => error.fmt(f),
            ValidationError::Links(error) => error.fmt(f),
            ValidationError::Resource(error) => error.fmt(f),
            ValidationError::Reference(error) => error.fmt(f),
            ValidationError::Relationship(error) => error.fmt(f),
            ValidationError::Attribute(error) => error.fmt(f),
            ValidationError::Multiple(errors) => errors.fmt(f),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<DocumentError> for ValidationError {
    fn from(error: DocumentError) -> Self {
        ValidationError::Document(error)
    }
}

impl From<MetaError> for ValidationError {
    fn from(error: MetaError) -> Self {
        ValidationError::Meta(error)
    }
}

impl From<LinksError> for ValidationError {
    fn from(error: LinksError) -> Self {
        ValidationError::Links(error)
    }
}

impl From<ResourceError> for ValidationError {
    fn from(error: ResourceError) -> Self {
        ValidationError::Resource(error)
    }
}

impl From<ReferenceError> for ValidationError {
    fn from(error: ReferenceError) -> Self {
        ValidationError::Reference(error)
    }
}

impl From<RelationshipError> for ValidationError {
    fn from(error: RelationshipError) -> Self {
        ValidationError::Relationship(error)
    }
}

impl From<AttributeError> for ValidationError {
    fn from(error: AttributeError) -> Self {
        ValidationError::Attribute(error)
    }
}

impl From<MultipleErrors> for ValidationError {
    fn from(errors: MultipleErrors) -> Self {
        ValidationError::Multiple(errors)
    }
}

// ValidationError is Send + Sync since all variants hold owned data
// (String, Vec, serde_json::Value). These assertions keep that true
// if the variant payloads change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

const MULTIPLE_ERRORS_PREAMBLE: &str = "The data provided failed json-api validation. \
     The detected errors are listed below. Each error can be inspected \
     individually via the errors() method of this error value.\n\n\n";

/// An ordered aggregate of at least two validation errors.
///
/// Produced by the coalescing step when a run detects several violations; a
/// single violation is returned directly and never wrapped. The rendered
/// message enumerates every constituent under a fixed preamble, and the
/// ordered list stays available through [`MultipleErrors::errors`] for
/// tooling that wants itemized detail.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleErrors {
    errors: Vec<ValidationError>,
}

impl MultipleErrors {
    /// Creates a `MultipleErrors` from a `Vec<ValidationError>`.
    ///
    /// Use this when you're certain the vec contains at least two errors; a
    /// lone error should be reported as itself.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec holds fewer than two errors.
    pub fn from_vec(errors: Vec<ValidationError>) -> Self {
        assert!(
            errors.len() >= 2,
            "MultipleErrors requires at least two errors"
        );
        Self { errors }
    }

    /// Returns the number of aggregated errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    ///
    /// This method exists for API consistency but always returns false.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the ordered constituent errors.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns an iterator over the constituent errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Returns the first constituent error.
    pub fn first(&self) -> &ValidationError {
        &self.errors[0]
    }

    /// Converts this aggregate into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl Display for MultipleErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MULTIPLE_ERRORS_PREAMBLE)?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{i})\t{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for MultipleErrors {}

impl IntoIterator for MultipleErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultipleErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// MultipleErrors is Send + Sync since it only contains ValidationError
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<MultipleErrors>();
    assert_sync::<MultipleErrors>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::DocumentPath;
    use serde_json::{json, Value};

    fn sample_errors() -> Vec<ValidationError> {
        let document = json!({"data": null});
        vec![
            DocumentError::missing_mandatory_member(
                &document,
                &DocumentPath::document(),
                &["data", "meta", "errors"],
            )
            .into(),
            MetaError::value_must_be_object(&document, &DocumentPath::document(), &json!(5)).into(),
        ]
    }

    #[test]
    fn test_errors_accessor_on_single() {
        let error: ValidationError =
            DocumentError::invalid_document(&Value::Null, &DocumentPath::document()).into();

        let listed = error.errors();
        assert_eq!(listed.len(), 1);
        assert_eq!(&listed[0], &error);
        assert!(!error.is_multiple());
    }

    #[test]
    fn test_errors_accessor_on_multiple() {
        let constituents = sample_errors();
        let error = ValidationError::Multiple(MultipleErrors::from_vec(constituents.clone()));

        assert!(error.is_multiple());
        assert_eq!(error.errors(), constituents.as_slice());
    }

    #[test]
    fn test_multiple_display_enumerates_zero_based() {
        let multiple = MultipleErrors::from_vec(sample_errors());
        let rendered = multiple.to_string();

        assert!(rendered.starts_with("The data provided failed json-api validation."));
        assert!(rendered.contains("\n0)\t"));
        assert!(rendered.contains("\n1)\t"));
        assert!(!rendered.contains("\n2)\t"));
    }

    #[test]
    fn test_display_dispatches_to_variant() {
        let document = json!({"data": null});
        let inner =
            MetaError::value_must_be_object(&document, &DocumentPath::document(), &json!(5));
        let error: ValidationError = inner.clone().into();

        assert_eq!(error.to_string(), inner.to_string());
    }

    #[test]
    #[should_panic(expected = "at least two errors")]
    fn test_from_vec_rejects_single_error() {
        let document = json!({});
        let lone: ValidationError =
            DocumentError::invalid_document(&document, &DocumentPath::document()).into();
        MultipleErrors::from_vec(vec![lone]);
    }
}
