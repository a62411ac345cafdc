//! Schema registry for named schema storage and lookup.
//!
//! This module provides the [`SchemaRegistry`] type that stores resource
//! schemas by type name and serves them to the validator through the
//! [`SchemaProvider`] seam.

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::schema::{ResourceSchema, SchemaProvider};

/// Type alias for the schema storage map.
type SchemaMap = Arc<RwLock<IndexMap<String, ResourceSchema>>>;

/// A thread-safe registry of resource schemas, keyed by type name.
///
/// The registry is the stock [`SchemaProvider`]: register every type the
/// application knows about, hand the registry to the validator, and
/// inheritance lookups resolve against it. Registration order is preserved,
/// so [`types`](SchemaRegistry::types) reports schemas in the order they were
/// added.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can validate concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// Cloning is shallow: clones share the same underlying map.
///
/// # Example
///
/// ```rust
/// use jsonapi_lint::{ResourceSchema, SchemaProvider, SchemaRegistry};
///
/// let registry = SchemaRegistry::new();
///
/// registry.register(
///     ResourceSchema::new("person")
///         .attr("first-name")
///         .has_many("pets", "pet"),
/// )?;
/// registry.register(ResourceSchema::new("animal").attr("name"))?;
/// registry.register(ResourceSchema::new("pet").inherits("animal"))?;
///
/// assert!(registry.schema_for("pet").is_some());
/// assert_eq!(registry.types(), vec!["person", "animal", "pet"]);
/// # Ok::<(), jsonapi_lint::RegistryError>(())
/// ```
pub struct SchemaRegistry {
    schemas: SchemaMap,
}

impl SchemaRegistry {
    /// Creates a new empty schema registry.
    pub fn new() -> Self {
        Self {
            schemas: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Registers a schema under its own type name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateType` if the type is already
    /// registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jsonapi_lint::{ResourceSchema, SchemaRegistry};
    ///
    /// let registry = SchemaRegistry::new();
    /// registry.register(ResourceSchema::new("person")).unwrap();
    ///
    /// // Duplicate registration fails
    /// assert!(registry.register(ResourceSchema::new("person")).is_err());
    /// ```
    pub fn register(&self, schema: ResourceSchema) -> Result<(), RegistryError> {
        let mut schemas = self.schemas.write();

        if schemas.contains_key(&schema.name) {
            return Err(RegistryError::DuplicateType(schema.name));
        }

        schemas.insert(schema.name.clone(), schema);
        Ok(())
    }

    /// Retrieves a schema by type name.
    ///
    /// Returns `None` if no schema is registered for the type.
    pub fn get(&self, type_name: &str) -> Option<ResourceSchema> {
        self.schemas.read().get(type_name).cloned()
    }

    /// Returns true when a schema is registered for the type.
    pub fn contains(&self, type_name: &str) -> bool {
        self.schemas.read().contains_key(type_name)
    }

    /// The registered type names, in registration order.
    pub fn types(&self) -> Vec<String> {
        self.schemas.read().keys().cloned().collect()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SchemaRegistry {
    fn clone(&self) -> Self {
        Self {
            schemas: Arc::clone(&self.schemas),
        }
    }
}

impl SchemaProvider for SchemaRegistry {
    fn schema_for(&self, type_name: &str) -> Option<ResourceSchema> {
        self.get(type_name)
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a schema for a type that already has one.
    #[error("schema for type '{0}' already registered")]
    DuplicateType(String),
}
