//! The per-run issue collector.
//!
//! Rules never fail eagerly; they append every violation they detect to an
//! [`Issues`] collector threaded through the run, and the coalescing step
//! decides afterwards whether the run as a whole passed. This is what lets a
//! single validation report all of its problems at once.

use crate::error::ValidationError;

/// Accumulates the errors and warnings detected during one validation run.
///
/// A collector is created per run, populated by the rules in discovery order,
/// and consumed exactly once by [`coalesce`](crate::coalesce). Warnings are
/// non-fatal observations (for example unknown members outside strict mode);
/// errors fail the run.
///
/// # Example
///
/// ```rust
/// use jsonapi_lint::{DocumentError, DocumentPath, Issues};
/// use serde_json::json;
///
/// let mut issues = Issues::new();
/// let document = json!({"data": null, "errors": []});
///
/// issues.error(DocumentError::disallowed_data_member(
///     &document,
///     &DocumentPath::document(),
/// ));
///
/// assert!(issues.has_errors());
/// assert_eq!(issues.errors().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Issues {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl Issues {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fatal violation.
    pub fn error(&mut self, error: impl Into<ValidationError>) {
        self.errors.push(error.into());
    }

    /// Records a non-fatal observation.
    pub fn warning(&mut self, warning: impl Into<ValidationError>) {
        self.warnings.push(warning.into());
    }

    /// Records `issue` as an error when `strict` is true, as a warning
    /// otherwise.
    pub fn strict(&mut self, strict: bool, issue: impl Into<ValidationError>) {
        if strict {
            self.error(issue);
        } else {
            self.warning(issue);
        }
    }

    /// The fatal violations recorded so far, in discovery order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The non-fatal observations recorded so far, in discovery order.
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Returns true when at least one error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns true when neither errors nor warnings have been recorded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Consumes the collector, yielding `(errors, warnings)`.
    pub fn into_parts(self) -> (Vec<ValidationError>, Vec<ValidationError>) {
        (self.errors, self.warnings)
    }
}
