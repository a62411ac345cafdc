//! Reduction of collected issues into a single outcome.

use crate::error::{MultipleErrors, ValidationError};
use crate::issues::Issues;

const WARNINGS_PREAMBLE: &str = "The data provided encountered likely json-api validation. \
     The potential errors are listed below.\n\n\n";

/// Reduces a set of collected issues to a single validation outcome.
///
/// Warnings never affect the returned value: they are reported through
/// [`tracing::warn!`] and dropped. Errors coalesce by count: none is
/// success, exactly one is returned untouched, and two or more are
/// wrapped in a [`MultipleErrors`] aggregate that preserves their
/// discovery order.
///
/// # Example
///
/// ```
/// use jsonapi_lint::{coalesce, Issues};
///
/// assert!(coalesce(Issues::new()).is_ok());
/// ```
pub fn coalesce(issues: Issues) -> Result<(), ValidationError> {
    let (mut errors, warnings) = issues.into_parts();

    emit_warnings(&warnings);

    match errors.len() {
        0 => Ok(()),
        1 => {
            tracing::debug!(errors = 1, "validation failed");
            Err(errors.remove(0))
        }
        _ => {
            tracing::debug!(errors = errors.len(), "validation failed");
            Err(ValidationError::Multiple(MultipleErrors::from_vec(errors)))
        }
    }
}

/// A lone warning is logged as itself; several are rolled into one
/// numbered report so the log carries a single entry per validation.
fn emit_warnings(warnings: &[ValidationError]) {
    match warnings {
        [] => {}
        [warning] => tracing::warn!("{warning}"),
        warnings => {
            let mut message = String::from(WARNINGS_PREAMBLE);
            for (i, warning) in warnings.iter().enumerate() {
                message.push_str(&format!("\n{i})\t{warning}"));
            }
            tracing::warn!("{message}");
        }
    }
}
