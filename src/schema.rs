//! Resource schemas and the provider seam.
//!
//! A [`ResourceSchema`] declares the attributes and relationships a resource
//! type may carry, plus an optional parent type it inherits from. The
//! validator never owns schemas; it asks a [`SchemaProvider`] for them, and
//! the provider's default methods implement the inheritance-chain walks that
//! attribute and relationship lookups need.

use std::collections::HashSet;

use crate::format::dasherize;

/// Whether a relationship points at many resources or one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    /// A to-many relationship; its `data` is an array of references.
    HasMany,
    /// A to-one relationship; its `data` is a single reference or null.
    BelongsTo,
}

/// A relationship declaration on a schema: the member key and the target
/// resource type it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipDef {
    pub key: String,
    pub target: String,
}

/// The result of resolving a relationship key along an inheritance chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipLookup {
    /// The relationship key that matched.
    pub key: String,
    /// The resource type the relationship references.
    pub target: String,
    /// To-many or to-one.
    pub kind: RelationshipKind,
    /// The type along the chain that declares the relationship.
    pub defined_on: String,
}

/// The declared shape of one resource type.
///
/// Schemas are plain data built with a chaining constructor; lookups that
/// honor `inherits` live on [`SchemaProvider`], which can resolve parent
/// types by name.
///
/// # Example
///
/// ```rust
/// use jsonapi_lint::ResourceSchema;
///
/// let person = ResourceSchema::new("person")
///     .attr("first-name")
///     .attr("last-name")
///     .has_many("pets", "pet");
///
/// assert_eq!(person.attributes, vec!["first-name", "last-name"]);
/// assert_eq!(person.has_many[0].target, "pet");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSchema {
    /// The resource type this schema describes.
    pub name: String,
    /// Attribute keys the type declares directly.
    pub attributes: Vec<String>,
    /// To-many relationship declarations.
    pub has_many: Vec<RelationshipDef>,
    /// To-one relationship declarations.
    pub belongs_to: Vec<RelationshipDef>,
    /// Parent type whose declarations this type also carries.
    pub inherits: Option<String>,
}

impl ResourceSchema {
    /// Creates an empty schema for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declares an attribute key.
    pub fn attr(mut self, key: impl Into<String>) -> Self {
        self.attributes.push(key.into());
        self
    }

    /// Declares a to-many relationship referencing `target`.
    pub fn has_many(mut self, key: impl Into<String>, target: impl Into<String>) -> Self {
        self.has_many.push(RelationshipDef {
            key: key.into(),
            target: target.into(),
        });
        self
    }

    /// Declares a to-one relationship referencing `target`.
    pub fn belongs_to(mut self, key: impl Into<String>, target: impl Into<String>) -> Self {
        self.belongs_to.push(RelationshipDef {
            key: key.into(),
            target: target.into(),
        });
        self
    }

    /// Declares the parent type whose attributes and relationships this type
    /// also carries.
    pub fn inherits(mut self, parent: impl Into<String>) -> Self {
        self.inherits = Some(parent.into());
        self
    }

    fn relationship(&self, key: &str) -> Option<(RelationshipKind, &RelationshipDef)> {
        if let Some(def) = self.has_many.iter().find(|def| def.key == key) {
            return Some((RelationshipKind::HasMany, def));
        }
        self.belongs_to
            .iter()
            .find(|def| def.key == key)
            .map(|def| (RelationshipKind::BelongsTo, def))
    }
}

/// Resolves resource types to their schemas.
///
/// Implementors supply [`schema_for`](SchemaProvider::schema_for); the
/// inheritance-aware lookups are provided. Inheritance chains are assumed
/// acyclic, but every walk carries a visited set so a cyclic graph terminates
/// with a miss instead of spinning.
///
/// # Example
///
/// ```rust
/// use jsonapi_lint::{ResourceSchema, SchemaProvider, SchemaRegistry};
///
/// let registry = SchemaRegistry::new();
/// registry.register(ResourceSchema::new("animal").attr("name"))?;
/// registry.register(ResourceSchema::new("pet").inherits("animal"))?;
///
/// // `name` is declared on the parent but found from the child.
/// assert_eq!(registry.find_attribute("pet", "name").as_deref(), Some("animal"));
/// assert!(registry.schema_implements("pet", "animal"));
/// # Ok::<(), jsonapi_lint::RegistryError>(())
/// ```
pub trait SchemaProvider: Send + Sync {
    /// The schema declared for `type_name`, if any.
    fn schema_for(&self, type_name: &str) -> Option<ResourceSchema>;

    /// A last-chance normalization applied to a type name whose direct lookup
    /// missed, before reporting the schema as unknown.
    fn format_fallback_type(&self, type_name: &str) -> String {
        dasherize(type_name)
    }

    /// Returns true when `candidate` is `target` or inherits from it,
    /// directly or transitively.
    fn schema_implements(&self, candidate: &str, target: &str) -> bool {
        let mut visited = HashSet::new();
        let mut current = Some(candidate.to_string());
        while let Some(name) = current {
            if name == target {
                return true;
            }
            if !visited.insert(name.clone()) {
                return false;
            }
            let Some(schema) = self.schema_for(&name) else {
                return false;
            };
            current = schema.inherits;
        }
        false
    }

    /// Resolves an attribute key along the inheritance chain of `type_name`,
    /// returning the type that declares it.
    fn find_attribute(&self, type_name: &str, key: &str) -> Option<String> {
        let mut visited = HashSet::new();
        let mut current = Some(type_name.to_string());
        while let Some(name) = current {
            if !visited.insert(name.clone()) {
                return None;
            }
            let schema = self.schema_for(&name)?;
            if schema.attributes.iter().any(|attr| attr == key) {
                return Some(name);
            }
            current = schema.inherits;
        }
        None
    }

    /// Resolves a relationship key along the inheritance chain of
    /// `type_name`.
    fn find_relationship(&self, type_name: &str, key: &str) -> Option<RelationshipLookup> {
        let mut visited = HashSet::new();
        let mut current = Some(type_name.to_string());
        while let Some(name) = current {
            if !visited.insert(name.clone()) {
                return None;
            }
            let schema = self.schema_for(&name)?;
            if let Some((kind, def)) = schema.relationship(key) {
                return Some(RelationshipLookup {
                    key: def.key.clone(),
                    target: def.target.clone(),
                    kind,
                    defined_on: name,
                });
            }
            current = schema.inherits;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapProvider {
        schemas: HashMap<String, ResourceSchema>,
    }

    impl MapProvider {
        fn new(schemas: Vec<ResourceSchema>) -> Self {
            Self {
                schemas: schemas
                    .into_iter()
                    .map(|schema| (schema.name.clone(), schema))
                    .collect(),
            }
        }
    }

    impl SchemaProvider for MapProvider {
        fn schema_for(&self, type_name: &str) -> Option<ResourceSchema> {
            self.schemas.get(type_name).cloned()
        }
    }

    fn menagerie() -> MapProvider {
        MapProvider::new(vec![
            ResourceSchema::new("person")
                .attr("first-name")
                .attr("last-name")
                .has_many("pets", "pet"),
            ResourceSchema::new("animal")
                .attr("name")
                .belongs_to("person", "person"),
            ResourceSchema::new("pet").inherits("animal"),
            ResourceSchema::new("dog").inherits("pet"),
        ])
    }

    #[test]
    fn test_builder_collects_declarations() {
        let schema = ResourceSchema::new("person")
            .attr("first-name")
            .has_many("pets", "pet")
            .belongs_to("employer", "company")
            .inherits("being");

        assert_eq!(schema.name, "person");
        assert_eq!(schema.attributes, vec!["first-name"]);
        assert_eq!(schema.has_many.len(), 1);
        assert_eq!(schema.belongs_to.len(), 1);
        assert_eq!(schema.inherits.as_deref(), Some("being"));
    }

    #[test]
    fn test_find_attribute_walks_inheritance() {
        let provider = menagerie();

        // declared directly
        assert_eq!(
            provider.find_attribute("animal", "name").as_deref(),
            Some("animal")
        );
        // declared two levels up
        assert_eq!(
            provider.find_attribute("dog", "name").as_deref(),
            Some("animal")
        );
        // declared nowhere along the chain
        assert_eq!(provider.find_attribute("dog", "wing-span"), None);
    }

    #[test]
    fn test_find_relationship_walks_inheritance() {
        let provider = menagerie();

        let lookup = provider
            .find_relationship("dog", "person")
            .unwrap_or_else(|| panic!("person relationship should resolve"));
        assert_eq!(lookup.kind, RelationshipKind::BelongsTo);
        assert_eq!(lookup.target, "person");
        assert_eq!(lookup.defined_on, "animal");

        let lookup = provider
            .find_relationship("person", "pets")
            .unwrap_or_else(|| panic!("pets relationship should resolve"));
        assert_eq!(lookup.kind, RelationshipKind::HasMany);
        assert_eq!(lookup.defined_on, "person");

        assert_eq!(provider.find_relationship("dog", "enemies"), None);
    }

    #[test]
    fn test_schema_implements() {
        let provider = menagerie();

        assert!(provider.schema_implements("dog", "dog"));
        assert!(provider.schema_implements("dog", "pet"));
        assert!(provider.schema_implements("dog", "animal"));
        assert!(!provider.schema_implements("animal", "dog"));
        assert!(!provider.schema_implements("dog", "person"));
    }

    #[test]
    fn test_cyclic_inheritance_terminates() {
        let provider = MapProvider::new(vec![
            ResourceSchema::new("a").inherits("b"),
            ResourceSchema::new("b").inherits("a"),
        ]);

        assert_eq!(provider.find_attribute("a", "anything"), None);
        assert_eq!(provider.find_relationship("a", "anything"), None);
        assert!(!provider.schema_implements("a", "c"));
    }

    #[test]
    fn test_chain_stops_at_unknown_parent() {
        let provider = MapProvider::new(vec![ResourceSchema::new("orphan").inherits("ghost")]);

        assert_eq!(provider.find_attribute("orphan", "name"), None);
        // the declared parent name matches even without a schema of its own
        assert!(provider.schema_implements("orphan", "ghost"));
        // but the walk cannot continue past it
        assert!(!provider.schema_implements("orphan", "ancestor"));
    }

    #[test]
    fn test_format_fallback_type_dasherizes() {
        let provider = menagerie();
        assert_eq!(provider.format_fallback_type("flyingDog"), "flying-dog");
    }
}
