//! The ordered document rule pipeline.
//!
//! A document run is a fixed sequence of independent structural rules sharing
//! one [`ValidationContext`]. Each rule appends the violations it finds to
//! the context's issue collector and returns a continue signal; only the
//! existence gate actually stops the pipeline, every other rule runs
//! regardless so a single pass reports all problems.

mod data;
mod document;
mod jsonapi;
mod links;
mod meta;

pub(crate) use meta::object_meta;

use serde_json::Value;

use crate::issues::Issues;
use crate::path::DocumentPath;
use crate::validator::Validator;

/// Shared state threaded through a rule run.
///
/// `document` is the full value under validation and never changes; `target`
/// is the substructure the current rules inspect (the document itself for the
/// top-level pipeline), with `path` naming its location.
pub(crate) struct ValidationContext<'a> {
    pub(crate) validator: &'a Validator,
    pub(crate) document: &'a Value,
    pub(crate) target: &'a Value,
    pub(crate) path: DocumentPath,
    pub(crate) issues: &'a mut Issues,
}

/// Runs the document rules in their fixed order.
///
/// Rule order is part of the contract: it fixes the discovery order of
/// errors, which callers see in aggregated messages.
pub(crate) fn run_document_rules(validator: &Validator, document: &Value, issues: &mut Issues) {
    let mut ctx = ValidationContext {
        validator,
        document,
        target: document,
        path: DocumentPath::document(),
        issues,
    };

    // A non-object document fails every later rule for the same root cause;
    // this is the one rule allowed to stop the run.
    if !document::document_exists(&mut ctx) {
        return;
    }

    document::has_at_least_one(&mut ctx);
    document::has_at_least_one_non_null(&mut ctx);
    document::cant_have_both(&mut ctx);
    document::has_no_unknown_members(&mut ctx);
    document::included_requires_data(&mut ctx);
    jsonapi::jsonapi_member(&mut ctx);
    meta::meta_member(&mut ctx);
    meta::meta_requires_sibling(&mut ctx);
    data::data_is_valid(&mut ctx);
    data::included_is_valid(&mut ctx);
    links::links_member(&mut ctx);
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::registry::SchemaRegistry;

    pub(crate) fn plain_validator() -> Validator {
        Validator::builder(SchemaRegistry::new()).build()
    }

    /// Runs a single rule against `document`, returning its continue signal
    /// and the issues it recorded.
    pub(crate) fn run_rule(
        validator: &Validator,
        document: &Value,
        rule: fn(&mut ValidationContext<'_>) -> bool,
    ) -> (bool, Issues) {
        let mut issues = Issues::new();
        let passed = {
            let mut ctx = ValidationContext {
                validator,
                document,
                target: document,
                path: DocumentPath::document(),
                issues: &mut issues,
            };
            rule(&mut ctx)
        };
        (passed, issues)
    }
}
