//! Resource-level validation errors.
//!
//! These four families cover the schema-aware checks: [`ResourceError`] for
//! the overall shape of a resource object, [`ReferenceError`] for resource
//! identifier objects, and [`RelationshipError`]/[`AttributeError`] for the
//! two schema-backed hashes. Unlike the document-level families they do not
//! snapshot the whole document; their excerpts are rebuilt from path, key and
//! offending value (key-style when the key itself is wrong, value-style
//! otherwise, none for the shape kinds that have no useful location).

use std::fmt::{self, Display};

use serde_json::Value;

use crate::error::render::{display_value, key_excerpt, value_excerpt};
use crate::path::DocumentPath;

/// The closed set of resource shape violation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceErrorKind {
    /// The resource slot holds null.
    Missing,
    /// A single resource was expected but an array was found.
    IsArray,
    /// The resource slot holds a non-object.
    Invalid,
    /// A key outside the resource specification.
    UnexpectedKey,
    /// A mandatory key (`id`, `type`) is absent.
    MissingKey,
    /// Neither `attributes` nor `relationships` is present.
    MissingInfo,
    /// `id` is not a non-empty string.
    InvalidIdValue,
    /// `type` is not a non-empty string.
    InvalidTypeValue,
    /// `type` is not in dasherized form.
    InvalidTypeFormat,
    /// No schema resolves for the resource type.
    UnknownSchema,
}

/// A violation of the resource object rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceError {
    pub kind: ResourceErrorKind,
    pub path: DocumentPath,
    /// The expected (dasherized) type, where the message cites one.
    pub type_name: Option<String>,
    /// The key the violation concerns.
    pub key: Option<String>,
    /// The offending value.
    pub value: Option<Value>,
}

impl ResourceError {
    fn base(kind: ResourceErrorKind, path: &DocumentPath) -> Self {
        Self {
            kind,
            path: path.clone(),
            type_name: None,
            key: None,
            value: None,
        }
    }

    /// The resource slot holds null.
    pub fn missing(path: &DocumentPath, value: &Value) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(ResourceErrorKind::Missing, path)
        }
    }

    /// A single resource was expected but an array was found.
    pub fn is_array(path: &DocumentPath) -> Self {
        Self::base(ResourceErrorKind::IsArray, path)
    }

    /// The resource slot holds a non-object.
    pub fn invalid(path: &DocumentPath, value: &Value) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(ResourceErrorKind::Invalid, path)
        }
    }

    /// A key outside the resource specification.
    pub fn unexpected_key(path: &DocumentPath, key: &str, value: &Value) -> Self {
        Self {
            key: Some(key.to_string()),
            value: Some(value.clone()),
            ..Self::base(ResourceErrorKind::UnexpectedKey, path)
        }
    }

    /// A mandatory key is absent.
    pub fn missing_key(path: &DocumentPath, key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::base(ResourceErrorKind::MissingKey, path)
        }
    }

    /// Neither of the `needed` keys is present.
    pub fn missing_info(path: &DocumentPath, needed: &[&str]) -> Self {
        Self {
            value: Some(Value::String(needed.join(", "))),
            ..Self::base(ResourceErrorKind::MissingInfo, path)
        }
    }

    /// `id` is not a non-empty string.
    pub fn invalid_id_value(path: &DocumentPath, value: &Value) -> Self {
        Self {
            key: Some("id".to_string()),
            value: Some(value.clone()),
            ..Self::base(ResourceErrorKind::InvalidIdValue, path)
        }
    }

    /// `type` is not a non-empty string.
    pub fn invalid_type_value(path: &DocumentPath, value: &Value) -> Self {
        Self {
            key: Some("type".to_string()),
            value: Some(value.clone()),
            ..Self::base(ResourceErrorKind::InvalidTypeValue, path)
        }
    }

    /// `type` is not dasherized; `dasherized` names the correct form.
    pub fn invalid_type_format(path: &DocumentPath, found: &str, dasherized: &str) -> Self {
        Self {
            key: Some("type".to_string()),
            type_name: Some(dasherized.to_string()),
            value: Some(Value::String(found.to_string())),
            ..Self::base(ResourceErrorKind::InvalidTypeFormat, path)
        }
    }

    /// No schema resolves for the resource type.
    pub fn unknown_schema(path: &DocumentPath, type_name: &str) -> Self {
        Self {
            key: Some("type".to_string()),
            value: Some(Value::String(type_name.to_string())),
            ..Self::base(ResourceErrorKind::UnknownSchema, path)
        }
    }

    fn subject(&self) -> String {
        self.key
            .clone()
            .unwrap_or_else(|| self.path.to_string())
    }

    fn value_text(&self) -> String {
        self.value.as_ref().map(display_value).unwrap_or_default()
    }

    /// The primary message, without the location excerpt.
    pub fn primary_message(&self) -> String {
        match self.kind {
            ResourceErrorKind::Missing | ResourceErrorKind::Invalid => format!(
                "Expected to receive a json-api resource at {} but instead found '{}'.",
                self.subject(),
                self.value_text()
            ),
            ResourceErrorKind::IsArray => format!(
                "Expected to receive a single json-api resource at {} but instead found an Array.",
                self.subject()
            ),
            ResourceErrorKind::UnexpectedKey => {
                format!("Unexpected key in payload: {}", self.subject())
            }
            ResourceErrorKind::MissingKey => {
                format!("Missing mandatory key in payload: {}", self.subject())
            }
            ResourceErrorKind::MissingInfo => format!(
                "In addition to 'type' and 'id', a resource needs at least one of the following keys: {}",
                self.value_text()
            ),
            ResourceErrorKind::InvalidIdValue | ResourceErrorKind::InvalidTypeValue => format!(
                "Resource.{} must be a string, found {}",
                self.subject(),
                self.value_text()
            ),
            ResourceErrorKind::InvalidTypeFormat => format!(
                "Expected resource type to be dasherized, found '{}' instead of '{}'.",
                self.value_text(),
                self.type_name.as_deref().unwrap_or("")
            ),
            ResourceErrorKind::UnknownSchema => format!(
                "Unknown resource, no schema was found for type '{}'",
                self.value_text()
            ),
        }
    }

    fn location(&self) -> String {
        match self.kind {
            ResourceErrorKind::Missing
            | ResourceErrorKind::IsArray
            | ResourceErrorKind::MissingInfo => String::new(),
            _ => value_excerpt(
                &self.path,
                self.key.as_deref().unwrap_or(""),
                self.value.as_ref().unwrap_or(&Value::Null),
            ),
        }
    }
}

impl Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.primary_message(), self.location())
    }
}

impl std::error::Error for ResourceError {}

/// The closed set of reference violation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceErrorKind {
    /// The reference slot holds a non-object.
    Invalid,
    /// A key outside `type`, `id`, `meta`.
    UnexpectedKey,
    /// `id` is not a non-empty string.
    InvalidIdValue,
    /// `type` is not a non-empty string.
    InvalidTypeValue,
    /// `type` is not in dasherized form.
    InvalidTypeFormat,
    /// No schema resolves for the reference type.
    UnknownSchema,
}

/// A violation of the resource identifier (reference) rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceError {
    pub kind: ReferenceErrorKind,
    pub path: DocumentPath,
    /// The expected (dasherized) type, where the message cites one.
    pub type_name: Option<String>,
    /// The key the violation concerns.
    pub key: Option<String>,
    /// The offending value.
    pub value: Option<Value>,
}

impl ReferenceError {
    fn base(kind: ReferenceErrorKind, path: &DocumentPath) -> Self {
        Self {
            kind,
            path: path.clone(),
            type_name: None,
            key: None,
            value: None,
        }
    }

    /// The reference slot holds a non-object.
    pub fn invalid(path: &DocumentPath, value: &Value) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(ReferenceErrorKind::Invalid, path)
        }
    }

    /// A key outside the reference specification.
    pub fn unexpected_key(path: &DocumentPath, key: &str, value: &Value) -> Self {
        Self {
            key: Some(key.to_string()),
            value: Some(value.clone()),
            ..Self::base(ReferenceErrorKind::UnexpectedKey, path)
        }
    }

    /// `id` is not a non-empty string.
    pub fn invalid_id_value(path: &DocumentPath, value: &Value) -> Self {
        Self {
            key: Some("id".to_string()),
            value: Some(value.clone()),
            ..Self::base(ReferenceErrorKind::InvalidIdValue, path)
        }
    }

    /// `type` is not a non-empty string.
    pub fn invalid_type_value(path: &DocumentPath, value: &Value) -> Self {
        Self {
            key: Some("type".to_string()),
            value: Some(value.clone()),
            ..Self::base(ReferenceErrorKind::InvalidTypeValue, path)
        }
    }

    /// `type` is not dasherized; `dasherized` names the correct form.
    pub fn invalid_type_format(path: &DocumentPath, found: &str, dasherized: &str) -> Self {
        Self {
            key: Some("type".to_string()),
            type_name: Some(dasherized.to_string()),
            value: Some(Value::String(found.to_string())),
            ..Self::base(ReferenceErrorKind::InvalidTypeFormat, path)
        }
    }

    /// No schema resolves for the reference type.
    pub fn unknown_schema(path: &DocumentPath, type_name: &str) -> Self {
        Self {
            key: Some("type".to_string()),
            value: Some(Value::String(type_name.to_string())),
            ..Self::base(ReferenceErrorKind::UnknownSchema, path)
        }
    }

    fn subject(&self) -> String {
        self.key
            .clone()
            .unwrap_or_else(|| self.path.to_string())
    }

    fn value_text(&self) -> String {
        self.value.as_ref().map(display_value).unwrap_or_default()
    }

    /// The primary message, without the location excerpt.
    pub fn primary_message(&self) -> String {
        match self.kind {
            ReferenceErrorKind::Invalid => format!(
                "Expected to receive a json-api reference at {} but instead found '{}'.",
                self.subject(),
                self.value_text()
            ),
            ReferenceErrorKind::UnexpectedKey => {
                format!("Unexpected key in payload: {}", self.subject())
            }
            ReferenceErrorKind::InvalidIdValue | ReferenceErrorKind::InvalidTypeValue => format!(
                "Resource.{} must be a string, found {}",
                self.subject(),
                self.value_text()
            ),
            ReferenceErrorKind::InvalidTypeFormat => format!(
                "Expected reference type to be dasherized, found '{}' instead of '{}'.",
                self.value_text(),
                self.type_name.as_deref().unwrap_or("")
            ),
            ReferenceErrorKind::UnknownSchema => format!(
                "Unknown reference, no schema was found for type '{}'",
                self.value_text()
            ),
        }
    }
}

impl Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = value_excerpt(
            &self.path,
            self.key.as_deref().unwrap_or(""),
            self.value.as_ref().unwrap_or(&Value::Null),
        );
        write!(f, "{}{}", self.primary_message(), location)
    }
}

impl std::error::Error for ReferenceError {}

/// The closed set of relationship violation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipErrorKind {
    /// The relationships hash is not an object.
    InvalidHash,
    /// The key resolves on no schema along the inheritance chain.
    UnknownRelationship,
    /// The relationship value itself is neither an object nor null.
    InvalidRelationshipValue,
    /// A `links`/`meta`/`data` member of a relationship is neither object nor null.
    InvalidMemberValue,
    /// A hasMany relationship's `data` is not an array.
    InvalidToManyData,
    /// A belongsTo relationship's `data` is not a single reference.
    InvalidToOneData,
    /// A relationship carries only `meta` where the policy demands more.
    MetaOnlyRelationship,
    /// A reference inside the relationship has a bad `id`.
    InvalidReferenceId,
    /// A reference inside the relationship has a bad `type`.
    InvalidReferenceType,
    /// A reference type is not in dasherized form.
    UnformattedReferenceType,
    /// A reference type matches neither the declared target nor its ancestors.
    MismatchedType,
}

/// A violation of the relationships hash rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipError {
    pub kind: RelationshipErrorKind,
    pub path: DocumentPath,
    /// The resource type the relationships belong to.
    pub type_name: String,
    /// The relationship key concerned (`relationships` for the hash kind).
    pub key: String,
    /// Secondary name: the sub-member for [`RelationshipErrorKind::InvalidMemberValue`],
    /// the correct dasherization for [`RelationshipErrorKind::UnformattedReferenceType`].
    pub member: Option<String>,
    /// The offending value.
    pub value: Option<Value>,
}

impl RelationshipError {
    fn base(
        kind: RelationshipErrorKind,
        path: &DocumentPath,
        type_name: &str,
        key: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.clone(),
            type_name: type_name.to_string(),
            key: key.into(),
            member: None,
            value: None,
        }
    }

    /// The relationships hash is not an object.
    pub fn invalid_hash(path: &DocumentPath, type_name: &str, value: &Value) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(RelationshipErrorKind::InvalidHash, path, type_name, "relationships")
        }
    }

    /// The key resolves on no schema along the inheritance chain.
    pub fn unknown_relationship(
        path: &DocumentPath,
        type_name: &str,
        key: &str,
        value: &Value,
    ) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(RelationshipErrorKind::UnknownRelationship, path, type_name, key)
        }
    }

    /// The relationship value itself is neither an object nor null.
    pub fn invalid_relationship_value(
        path: &DocumentPath,
        type_name: &str,
        key: &str,
        value: &Value,
    ) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(
                RelationshipErrorKind::InvalidRelationshipValue,
                path,
                type_name,
                key,
            )
        }
    }

    /// A `links`/`meta`/`data` member is neither object nor null.
    pub fn invalid_member_value(
        path: &DocumentPath,
        type_name: &str,
        key: &str,
        member: &str,
        value: &Value,
    ) -> Self {
        Self {
            member: Some(member.to_string()),
            value: Some(value.clone()),
            ..Self::base(RelationshipErrorKind::InvalidMemberValue, path, type_name, key)
        }
    }

    /// A hasMany relationship's `data` is not an array.
    pub fn invalid_to_many_data(
        path: &DocumentPath,
        type_name: &str,
        key: &str,
        value: &Value,
    ) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(RelationshipErrorKind::InvalidToManyData, path, type_name, key)
        }
    }

    /// A belongsTo relationship's `data` is not a single reference.
    pub fn invalid_to_one_data(
        path: &DocumentPath,
        type_name: &str,
        key: &str,
        value: &Value,
    ) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(RelationshipErrorKind::InvalidToOneData, path, type_name, key)
        }
    }

    /// A relationship carries only `meta`.
    pub fn meta_only(path: &DocumentPath, type_name: &str, key: &str, value: &Value) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(RelationshipErrorKind::MetaOnlyRelationship, path, type_name, key)
        }
    }

    /// A reference inside the relationship has a bad `id`.
    pub fn invalid_reference_id(
        path: &DocumentPath,
        type_name: &str,
        key: &str,
        value: &Value,
    ) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(RelationshipErrorKind::InvalidReferenceId, path, type_name, key)
        }
    }

    /// A reference inside the relationship has a bad `type`.
    pub fn invalid_reference_type(
        path: &DocumentPath,
        type_name: &str,
        key: &str,
        value: &Value,
    ) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(RelationshipErrorKind::InvalidReferenceType, path, type_name, key)
        }
    }

    /// A reference type is not dasherized; `dasherized` names the correct form.
    pub fn unformatted_reference_type(
        path: &DocumentPath,
        type_name: &str,
        key: &str,
        found: &str,
        dasherized: &str,
    ) -> Self {
        Self {
            member: Some(dasherized.to_string()),
            value: Some(Value::String(found.to_string())),
            ..Self::base(
                RelationshipErrorKind::UnformattedReferenceType,
                path,
                type_name,
                key,
            )
        }
    }

    /// A reference type matches neither the declared target nor its ancestors.
    pub fn mismatched_type(path: &DocumentPath, type_name: &str, key: &str, value: &Value) -> Self {
        Self {
            value: Some(value.clone()),
            ..Self::base(RelationshipErrorKind::MismatchedType, path, type_name, key)
        }
    }

    fn value_text(&self) -> String {
        self.value.as_ref().map(display_value).unwrap_or_default()
    }

    /// The primary message, without the location excerpt.
    pub fn primary_message(&self) -> String {
        match self.kind {
            RelationshipErrorKind::InvalidHash => format!(
                "Expected the relationships hash for a resource to be an object, found '{}' for type '{}'",
                self.value_text(),
                self.type_name
            ),
            RelationshipErrorKind::UnknownRelationship => format!(
                "The relationship '{}' does not exist on the schema for type '{}'",
                self.key, self.type_name
            ),
            RelationshipErrorKind::InvalidRelationshipValue => format!(
                "The relationship '{}' on a resource of type '{}' MUST be an object, found '{}'.",
                self.key,
                self.type_name,
                self.value_text()
            ),
            RelationshipErrorKind::InvalidMemberValue => format!(
                "The '{}' member of the relationship '{}' on a resource of type '{}' MUST be an object or null.",
                self.member.as_deref().unwrap_or(""),
                self.key,
                self.type_name
            ),
            RelationshipErrorKind::InvalidToManyData => format!(
                "The data for the hasMany relationship '{}' on a resource of type '{}' MUST be an array of references.",
                self.key, self.type_name
            ),
            RelationshipErrorKind::InvalidToOneData => format!(
                "The data for the belongsTo relationship '{}' on a resource of type '{}' MUST be a single reference.",
                self.key, self.type_name
            ),
            RelationshipErrorKind::MetaOnlyRelationship => format!(
                "The relationship '{}' on a resource of type '{}' MUST NOT contain only 'meta': expected 'data' or 'links' as a sibling.",
                self.key, self.type_name
            ),
            RelationshipErrorKind::InvalidReferenceId => format!(
                "Resource.id must be a string, found {}",
                self.value_text()
            ),
            RelationshipErrorKind::InvalidReferenceType => format!(
                "Resource.type must be a string, found {}",
                self.value_text()
            ),
            RelationshipErrorKind::UnformattedReferenceType => format!(
                "Expected reference type to be dasherized, found '{}' instead of '{}'.",
                self.value_text(),
                self.member.as_deref().unwrap_or("")
            ),
            RelationshipErrorKind::MismatchedType => format!(
                "The reference type '{}' is not valid for the relationship '{}' on a resource of type '{}'.",
                self.value_text(),
                self.key,
                self.type_name
            ),
        }
    }

    fn excerpt_key(&self) -> &str {
        match self.kind {
            RelationshipErrorKind::InvalidHash => "relationships",
            RelationshipErrorKind::InvalidMemberValue => self.member.as_deref().unwrap_or(""),
            RelationshipErrorKind::InvalidToManyData | RelationshipErrorKind::InvalidToOneData => {
                "data"
            }
            RelationshipErrorKind::InvalidReferenceId => "id",
            RelationshipErrorKind::InvalidReferenceType
            | RelationshipErrorKind::UnformattedReferenceType
            | RelationshipErrorKind::MismatchedType => "type",
            _ => &self.key,
        }
    }
}

impl Display for RelationshipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.as_ref().unwrap_or(&Value::Null);
        let location = match self.kind {
            RelationshipErrorKind::UnknownRelationship => {
                key_excerpt(&self.path, self.excerpt_key(), value)
            }
            _ => value_excerpt(&self.path, self.excerpt_key(), value),
        };
        write!(f, "{}{}", self.primary_message(), location)
    }
}

impl std::error::Error for RelationshipError {}

/// The closed set of attribute violation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeErrorKind {
    /// The attributes hash is not an object.
    InvalidHash,
    /// The key resolves on no schema along the inheritance chain.
    UnknownAttribute,
}

/// A violation of the attributes hash rules.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeError {
    pub kind: AttributeErrorKind,
    pub path: DocumentPath,
    /// The resource type the attributes belong to.
    pub type_name: String,
    /// The attribute key concerned (`attributes` for the hash kind).
    pub key: String,
    /// The offending value.
    pub value: Option<Value>,
}

impl AttributeError {
    /// The attributes hash is not an object.
    pub fn invalid_hash(path: &DocumentPath, type_name: &str, value: &Value) -> Self {
        Self {
            kind: AttributeErrorKind::InvalidHash,
            path: path.clone(),
            type_name: type_name.to_string(),
            key: "attributes".to_string(),
            value: Some(value.clone()),
        }
    }

    /// The key resolves on no schema along the inheritance chain.
    pub fn unknown_attribute(
        path: &DocumentPath,
        type_name: &str,
        key: &str,
        value: &Value,
    ) -> Self {
        Self {
            kind: AttributeErrorKind::UnknownAttribute,
            path: path.clone(),
            type_name: type_name.to_string(),
            key: key.to_string(),
            value: Some(value.clone()),
        }
    }

    fn value_text(&self) -> String {
        self.value.as_ref().map(display_value).unwrap_or_default()
    }

    /// The primary message, without the location excerpt.
    pub fn primary_message(&self) -> String {
        match self.kind {
            AttributeErrorKind::InvalidHash => format!(
                "Expected the attributes hash for a resource to be an object, found '{}' for type '{}'",
                self.value_text(),
                self.type_name
            ),
            AttributeErrorKind::UnknownAttribute => format!(
                "The attribute '{}' does not exist on the schema for type '{}'",
                self.key, self.type_name
            ),
        }
    }
}

impl Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.as_ref().unwrap_or(&Value::Null);
        let location = match self.kind {
            AttributeErrorKind::UnknownAttribute => key_excerpt(&self.path, &self.key, value),
            AttributeErrorKind::InvalidHash => value_excerpt(&self.path, &self.key, value),
        };
        write!(f, "{}{}", self.primary_message(), location)
    }
}

impl std::error::Error for AttributeError {}
