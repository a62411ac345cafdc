//! Document-level validation errors.
//!
//! The three error families in this module cover the document rule pipeline:
//! [`DocumentError`] for top-level membership and the `jsonapi` object,
//! [`MetaError`] for `meta` members anywhere a document carries one, and
//! [`LinksError`] for the `links` object. They all snapshot the offending
//! document and render an object-style excerpt after the primary message.

use std::fmt::{self, Display};

use serde_json::Value;

use crate::error::render::{display_value, object_excerpt, oxford_list};
use crate::format::json_type_of;
use crate::path::DocumentPath;

/// The closed set of document-level violation kinds.
///
/// Kinds are plain tokens; the contextual data lives on [`DocumentError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentErrorKind {
    /// The value under validation is not a JSON object at all.
    InvalidDocument,
    /// None of `data`, `meta`, `errors` is present.
    MissingMandatoryMember,
    /// None of `data`, `meta`, `errors` is present with a non-null value.
    NullMandatoryMember,
    /// Both `data` and `errors` are present.
    DisallowedDataMember,
    /// `included` is present without `data`.
    DisallowedIncludedMember,
    /// A top-level or `jsonapi` member outside the specification.
    UnknownMember,
    /// A member that must be an object holds something else.
    ValueMustBeObject,
    /// The `jsonapi` object carries no `version`.
    MissingVersion,
    /// The `jsonapi.version` member is not a non-empty string.
    VersionMustBeString,
    /// `included` is present but not an array.
    InvalidIncludedValue,
    /// An included resource is referenced by nothing in the document.
    /// Reported as a warning; sparse fieldsets legitimately cause it.
    UnlinkedIncludedResource,
}

/// A structural violation of the JSON:API document rules.
///
/// # Example
///
/// ```rust
/// use jsonapi_lint::{DocumentError, DocumentErrorKind, DocumentPath};
/// use serde_json::json;
///
/// let error = DocumentError::invalid_document(&json!(true), &DocumentPath::document());
/// assert_eq!(error.kind, DocumentErrorKind::InvalidDocument);
/// assert!(error
///     .to_string()
///     .contains("Value of type \"boolean\" is not a valid json-api document."));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentError {
    /// Which rule was violated.
    pub kind: DocumentErrorKind,
    /// Where in the document the violation sits.
    pub path: DocumentPath,
    /// The member the violation concerns, when one is singled out.
    pub member: Option<String>,
    /// The offending value (or offending key, for unknown members).
    pub value: Option<Value>,
    /// Candidate members cited by the mandatory-member messages.
    pub candidates: Vec<&'static str>,
    /// Snapshot of the document under validation, for the excerpt.
    pub document: Value,
}

impl DocumentError {
    fn base(kind: DocumentErrorKind, document: &Value, path: &DocumentPath) -> Self {
        Self {
            kind,
            path: path.clone(),
            member: None,
            value: None,
            candidates: Vec::new(),
            document: document.clone(),
        }
    }

    /// The value under validation is not an object.
    pub fn invalid_document(document: &Value, path: &DocumentPath) -> Self {
        Self::base(DocumentErrorKind::InvalidDocument, document, path)
    }

    /// None of the candidate members is present.
    pub fn missing_mandatory_member(
        document: &Value,
        path: &DocumentPath,
        candidates: &[&'static str],
    ) -> Self {
        Self {
            candidates: candidates.to_vec(),
            ..Self::base(DocumentErrorKind::MissingMandatoryMember, document, path)
        }
    }

    /// None of the candidate members is present and non-null.
    pub fn null_mandatory_member(
        document: &Value,
        path: &DocumentPath,
        candidates: &[&'static str],
    ) -> Self {
        Self {
            candidates: candidates.to_vec(),
            ..Self::base(DocumentErrorKind::NullMandatoryMember, document, path)
        }
    }

    /// `data` and `errors` are both present.
    pub fn disallowed_data_member(document: &Value, path: &DocumentPath) -> Self {
        Self::base(DocumentErrorKind::DisallowedDataMember, document, path)
    }

    /// `included` is present without `data`.
    pub fn disallowed_included_member(document: &Value, path: &DocumentPath) -> Self {
        Self::base(DocumentErrorKind::DisallowedIncludedMember, document, path)
    }

    /// An unknown top-level member.
    pub fn unknown_member(document: &Value, path: &DocumentPath, key: &str) -> Self {
        Self {
            value: Some(Value::String(key.to_string())),
            ..Self::base(DocumentErrorKind::UnknownMember, document, path)
        }
    }

    /// An unknown member inside the `jsonapi` object.
    pub fn unknown_jsonapi_member(document: &Value, path: &DocumentPath, key: &str) -> Self {
        Self {
            member: Some("jsonapi".to_string()),
            value: Some(Value::String(key.to_string())),
            ..Self::base(DocumentErrorKind::UnknownMember, document, path)
        }
    }

    /// A member that must be an object holds `value` instead.
    pub fn value_must_be_object(
        document: &Value,
        path: &DocumentPath,
        member: &str,
        value: &Value,
    ) -> Self {
        Self {
            member: Some(member.to_string()),
            value: Some(value.clone()),
            ..Self::base(DocumentErrorKind::ValueMustBeObject, document, path)
        }
    }

    /// The `jsonapi` object has no `version` member.
    pub fn missing_version(document: &Value, path: &DocumentPath) -> Self {
        Self::base(DocumentErrorKind::MissingVersion, document, path)
    }

    /// The `jsonapi.version` member is not a non-empty string.
    pub fn version_must_be_string(document: &Value, path: &DocumentPath, value: &Value) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(DocumentErrorKind::VersionMustBeString, document, path)
        }
    }

    /// `included` is not an array.
    pub fn invalid_included_value(document: &Value, path: &DocumentPath, value: &Value) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(DocumentErrorKind::InvalidIncludedValue, document, path)
        }
    }

    /// An included resource nothing in the document references.
    pub fn unlinked_included_resource(
        document: &Value,
        path: &DocumentPath,
        type_name: &str,
        id: &str,
    ) -> Self {
        Self {
            member: Some(type_name.to_string()),
            value: Some(Value::String(id.to_string())),
            ..Self::base(DocumentErrorKind::UnlinkedIncludedResource, document, path)
        }
    }

    fn member_name(&self) -> &str {
        self.member.as_deref().unwrap_or("")
    }

    fn value_type(&self) -> &'static str {
        self.value.as_ref().map(json_type_of).unwrap_or("Null")
    }

    fn offending_key(&self) -> String {
        self.value.as_ref().map(display_value).unwrap_or_default()
    }

    /// The primary message, without the location excerpt.
    pub fn primary_message(&self) -> String {
        match self.kind {
            DocumentErrorKind::InvalidDocument => format!(
                "Value of type \"{}\" is not a valid json-api document.",
                json_type_of(&self.document)
            ),
            DocumentErrorKind::MissingMandatoryMember => format!(
                "A json-api document MUST contain one of {} as a member.",
                oxford_list(&self.candidates)
            ),
            DocumentErrorKind::NullMandatoryMember => format!(
                "A json-api document MUST contain one of {} as a non-null member.",
                oxford_list(&self.candidates)
            ),
            DocumentErrorKind::DisallowedDataMember => {
                "A json-api document MUST NOT contain both `data` and `errors` as a members."
                    .to_string()
            }
            DocumentErrorKind::DisallowedIncludedMember => {
                "A json-api document MUST NOT contain `included` as a member unless `data` is also present."
                    .to_string()
            }
            DocumentErrorKind::UnknownMember => {
                if self.member_name() == "jsonapi" {
                    format!(
                        "'{}' is not a valid member of the jsonapi object on a json-api document.",
                        self.offending_key()
                    )
                } else {
                    format!(
                        "'{}' is not a valid member of a json-api document.",
                        self.offending_key()
                    )
                }
            }
            DocumentErrorKind::ValueMustBeObject => format!(
                "'{}.{}' MUST be an object if present, found value of type {}",
                self.path,
                self.member_name(),
                self.value_type()
            ),
            DocumentErrorKind::MissingVersion => {
                "expected a 'version' member to be present in the 'document.jsonapi' object"
                    .to_string()
            }
            DocumentErrorKind::VersionMustBeString => format!(
                "expected the 'version' member present in the 'document.jsonapi' object to be a string, found value of type {}",
                self.value_type()
            ),
            DocumentErrorKind::InvalidIncludedValue => format!(
                "expected document.included to be an Array, instead found value of type {}",
                self.value_type()
            ),
            DocumentErrorKind::UnlinkedIncludedResource => format!(
                "The resource '{}' with id '{}' in 'document.included' is not referenced by the primary data or any other included resource.",
                self.member_name(),
                self.offending_key()
            ),
        }
    }
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.primary_message(), object_excerpt(&self.document))
    }
}

impl std::error::Error for DocumentError {}

/// The closed set of `meta` violation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaErrorKind {
    /// `meta` is the only meaningful member where the policy demands a sibling.
    DisallowedSolitaryMetaMember,
    /// `meta` holds a non-object value.
    ValueMustBeObject,
    /// `meta` is an empty object.
    ObjectMustNotBeEmpty,
}

/// A violation of the `meta` member rules.
///
/// `path` points at the object that owns the `meta` member (the document,
/// `<document>.jsonapi`, a reference, ...), so identical violations at
/// different depths stay distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaError {
    pub kind: MetaErrorKind,
    /// Path of the object owning the `meta` member.
    pub path: DocumentPath,
    pub value: Option<Value>,
    /// Sibling members the solitary-meta policy expected.
    pub expected: Vec<&'static str>,
    /// Host-supplied override for the solitary-meta primary message.
    pub custom_message: Option<String>,
    pub document: Value,
}

impl MetaError {
    fn base(kind: MetaErrorKind, document: &Value, path: &DocumentPath) -> Self {
        Self {
            kind,
            path: path.clone(),
            value: None,
            expected: Vec::new(),
            custom_message: None,
            document: document.clone(),
        }
    }

    /// `meta` has no non-null sibling from `expected`.
    pub fn solitary_meta_member(
        document: &Value,
        path: &DocumentPath,
        expected: &[&'static str],
    ) -> Self {
        Self {
            expected: expected.to_vec(),
            ..Self::base(MetaErrorKind::DisallowedSolitaryMetaMember, document, path)
        }
    }

    /// As [`MetaError::solitary_meta_member`], with a host-supplied message.
    pub fn solitary_meta_member_with_message(
        document: &Value,
        path: &DocumentPath,
        expected: &[&'static str],
        message: impl Into<String>,
    ) -> Self {
        Self {
            custom_message: Some(message.into()),
            ..Self::solitary_meta_member(document, path, expected)
        }
    }

    /// `meta` holds a non-object value.
    pub fn value_must_be_object(document: &Value, path: &DocumentPath, value: &Value) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(MetaErrorKind::ValueMustBeObject, document, path)
        }
    }

    /// `meta` is an empty object.
    pub fn must_not_be_empty(document: &Value, path: &DocumentPath) -> Self {
        Self::base(MetaErrorKind::ObjectMustNotBeEmpty, document, path)
    }

    fn value_type(&self) -> &'static str {
        self.value.as_ref().map(json_type_of).unwrap_or("Null")
    }

    /// The primary message, without the location excerpt.
    pub fn primary_message(&self) -> String {
        match self.kind {
            MetaErrorKind::DisallowedSolitaryMetaMember => {
                if let Some(message) = &self.custom_message {
                    return message.clone();
                }
                format!(
                    "'{path}.meta' MUST NOT be the only member of '{path}. Expected {} as a sibling.",
                    oxford_list(&self.expected),
                    path = self.path
                )
            }
            MetaErrorKind::ValueMustBeObject => format!(
                "'{}.meta' MUST be an object when present: found value of type {}",
                self.path,
                self.value_type()
            ),
            MetaErrorKind::ObjectMustNotBeEmpty => format!(
                "'{}.meta' MUST have at least one member: found an empty object.",
                self.path
            ),
        }
    }
}

impl Display for MetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.primary_message(), object_excerpt(&self.document))
    }
}

impl std::error::Error for MetaError {}

/// The closed set of `links` violation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinksErrorKind {
    /// A links member outside `self`, `related` and the pagination set.
    UnknownMember,
    /// `links` holds a non-object value.
    ValueMustBeObject,
    /// `links` is an empty object.
    ObjectMustNotBeEmpty,
    /// `self` is neither a string URL nor a link object.
    InvalidSelf,
    /// `related` is neither a string URL nor a link object.
    InvalidRelated,
    /// A pagination member is malformed, or missing while its peers are present.
    InvalidPagination,
}

/// A violation of the `links` member rules.
#[derive(Debug, Clone, PartialEq)]
pub struct LinksError {
    pub kind: LinksErrorKind,
    /// Path of the object owning the `links` member.
    pub path: DocumentPath,
    /// The links member concerned (`links` itself for object-level kinds).
    pub member: String,
    pub value: Option<Value>,
    pub document: Value,
}

impl LinksError {
    fn base(
        kind: LinksErrorKind,
        document: &Value,
        path: &DocumentPath,
        member: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.clone(),
            member: member.into(),
            value: None,
            document: document.clone(),
        }
    }

    /// `links` holds a non-object value.
    pub fn value_must_be_object(document: &Value, path: &DocumentPath, value: &Value) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(LinksErrorKind::ValueMustBeObject, document, path, "links")
        }
    }

    /// `links` is an empty object.
    pub fn must_not_be_empty(document: &Value, path: &DocumentPath) -> Self {
        Self::base(LinksErrorKind::ObjectMustNotBeEmpty, document, path, "links")
    }

    /// A links member outside the specification.
    pub fn unknown_member(document: &Value, path: &DocumentPath, key: &str) -> Self {
        Self::base(LinksErrorKind::UnknownMember, document, path, key)
    }

    /// `self` is malformed.
    pub fn invalid_self(document: &Value, path: &DocumentPath, value: &Value) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(LinksErrorKind::InvalidSelf, document, path, "self")
        }
    }

    /// `related` is malformed.
    pub fn invalid_related(document: &Value, path: &DocumentPath, value: &Value) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(LinksErrorKind::InvalidRelated, document, path, "related")
        }
    }

    /// A pagination member is malformed or missing while its peers are present.
    pub fn invalid_pagination(
        document: &Value,
        path: &DocumentPath,
        member: &str,
        value: Option<&Value>,
    ) -> Self {
        Self {
            value: value.cloned(),
            ..Self::base(LinksErrorKind::InvalidPagination, document, path, member)
        }
    }

    fn value_type(&self) -> &'static str {
        self.value.as_ref().map(json_type_of).unwrap_or("Null")
    }

    /// The primary message, without the location excerpt.
    pub fn primary_message(&self) -> String {
        match self.kind {
            LinksErrorKind::ValueMustBeObject => format!(
                "'{}.{}' MUST be an object when present: found value of type {}",
                self.path,
                self.member,
                self.value_type()
            ),
            LinksErrorKind::ObjectMustNotBeEmpty => format!(
                "'{}.{}' MUST have at least one member: found an empty object.",
                self.path, self.member
            ),
            LinksErrorKind::UnknownMember => format!(
                "'{}.links' MAY NOT contain any non-spec members: found '{}'.",
                self.path, self.member
            ),
            LinksErrorKind::InvalidSelf => format!(
                "'{}.links' MUST contain self as string URLs or an object with members `href` (a string URL) and an optional `meta` object.",
                self.path
            ),
            LinksErrorKind::InvalidRelated => format!(
                "'{}.links' MUST contain related as string URLs or an object with members `href` (a string URL) and an optional `meta` object.",
                self.path
            ),
            LinksErrorKind::InvalidPagination => format!(
                "'{}.links' included pagination MUST be null, string URL or an object with members `href` (a string URL) and an optional `meta` object.",
                self.path
            ),
        }
    }
}

impl Display for LinksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.primary_message(), object_excerpt(&self.document))
    }
}

impl std::error::Error for LinksError {}
