//! Tests for issue collection and the coalescing of issues into a
//! single outcome.

use jsonapi_lint::{coalesce, DocumentError, DocumentPath, Issues, ValidationError};
use serde_json::json;

fn unknown_member(key: &str) -> ValidationError {
    let document = json!({ key: true });
    DocumentError::unknown_member(&document, &DocumentPath::document(), key).into()
}

#[test]
fn test_no_issues_coalesce_to_success() {
    assert!(coalesce(Issues::new()).is_ok());
}

#[test]
fn test_one_error_is_returned_as_itself() {
    let error = unknown_member("vendor");
    let mut issues = Issues::new();
    issues.error(error.clone());

    assert_eq!(coalesce(issues), Err(error));
}

#[test]
fn test_many_errors_become_one_aggregate() {
    let mut issues = Issues::new();
    issues.error(unknown_member("one"));
    issues.error(unknown_member("two"));
    issues.error(unknown_member("three"));

    let error = coalesce(issues).unwrap_err();
    assert!(error.is_multiple());
    assert_eq!(error.errors().len(), 3);

    // Discovery order is preserved.
    assert!(error.errors()[0].to_string().contains("'one'"));
    assert!(error.errors()[2].to_string().contains("'three'"));
}

#[test]
fn test_aggregate_message_is_self_contained() {
    let mut issues = Issues::new();
    issues.error(unknown_member("one"));
    issues.error(unknown_member("two"));

    let message = coalesce(issues).unwrap_err().to_string();
    assert!(message.starts_with("The data provided failed json-api validation."));
    assert!(message.contains("\n0)\t"));
    assert!(message.contains("\n1)\t"));
    assert!(message.contains("'one' is not a valid member"));
    assert!(message.contains("'two' is not a valid member"));
}

#[test]
fn test_single_error_exposes_itself_through_errors() {
    let error = unknown_member("vendor");
    assert_eq!(error.errors().len(), 1);
    assert!(!error.is_multiple());
}

#[test]
fn test_warnings_are_dropped_from_the_outcome() {
    let mut issues = Issues::new();
    issues.warning(unknown_member("vendor"));
    assert!(coalesce(issues).is_ok());

    let error = unknown_member("vendor");
    let mut issues = Issues::new();
    issues.error(error.clone());
    issues.warning(unknown_member("extra"));
    assert_eq!(coalesce(issues), Err(error));
}

#[test]
fn test_strict_routing_picks_the_channel() {
    let mut issues = Issues::new();
    issues.strict(true, unknown_member("vendor"));
    assert_eq!(issues.errors().len(), 1);
    assert!(issues.warnings().is_empty());

    let mut issues = Issues::new();
    issues.strict(false, unknown_member("vendor"));
    assert!(issues.errors().is_empty());
    assert_eq!(issues.warnings().len(), 1);
}

#[test]
fn test_aggregate_iterates_in_order() {
    let mut issues = Issues::new();
    issues.error(unknown_member("one"));
    issues.error(unknown_member("two"));

    let Err(ValidationError::Multiple(aggregate)) = coalesce(issues) else {
        panic!("expected an aggregate");
    };

    let texts: Vec<String> = aggregate.iter().map(ToString::to_string).collect();
    assert_eq!(texts.len(), 2);
    assert!(texts[0].contains("'one'"));
    assert!(texts[1].contains("'two'"));

    let first = aggregate.first().to_string();
    assert!(first.contains("'one'"));
}
