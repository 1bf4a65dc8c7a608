use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::identifier::ResourceIdentifier;
use crate::links::Links;
use crate::meta::Meta;
use crate::validation::ConversionError;

/// Ordered attribute mapping of a resource.
pub type Attributes = IndexMap<String, Value>;

/// Ordered relationship mapping of a resource.
pub type Relationships = IndexMap<String, Relationship>;

/// Resource linkage: one identifier or an ordered sequence of identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    /// To-one relationship, rendered as an identifier object.
    ToOne(ResourceIdentifier),
    /// To-many relationship, rendered as an array of identifier objects.
    ToMany(Vec<ResourceIdentifier>),
}

/// One relationship entry: resource linkage plus optional links/meta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Resource linkage for this relationship.
    pub data: Linkage,
    /// Relationship-level links, omitted when empty.
    #[serde(skip_serializing_if = "Links::is_empty", default)]
    pub links: Links,
    /// Relationship-level metadata, omitted when empty.
    #[serde(skip_serializing_if = "Meta::is_empty", default)]
    pub meta: Meta,
}

impl Relationship {
    /// Creates a to-one relationship without links or metadata.
    pub fn to_one(identifier: ResourceIdentifier) -> Self {
        Self {
            data: Linkage::ToOne(identifier),
            links: Links::new(),
            meta: Meta::new(),
        }
    }

    /// Creates a to-many relationship without links or metadata.
    pub fn to_many(identifiers: Vec<ResourceIdentifier>) -> Self {
        Self {
            data: Linkage::ToMany(identifiers),
            links: Links::new(),
            meta: Meta::new(),
        }
    }
}

/// One domain entity rendered for the wire.
///
/// `id` and `type` are always serialized, even when every other section is
/// empty; `attributes`, `relationships`, `links`, and `meta` are omitted
/// when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource identifier within the type.
    pub id: String,
    /// Resource type name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Domain attributes, omitted when empty.
    #[serde(skip_serializing_if = "Attributes::is_empty", default)]
    pub attributes: Attributes,
    /// Relationships to other resources, omitted when empty.
    #[serde(skip_serializing_if = "Relationships::is_empty", default)]
    pub relationships: Relationships,
    /// Resource-level links, omitted when empty.
    #[serde(skip_serializing_if = "Links::is_empty", default)]
    pub links: Links,
    /// Resource-level metadata, omitted when empty.
    #[serde(skip_serializing_if = "Meta::is_empty", default)]
    pub meta: Meta,
}

impl Resource {
    /// Converts a domain entity into its canonical wire shape.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::MissingIdentity`] when the entity reports
    /// an empty type or id; no partially-formed resource is produced.
    pub fn from_entity<E: Resourceful>(entity: &E) -> Result<Self, ConversionError> {
        let kind = entity.resource_type();
        if kind.is_empty() {
            return Err(ConversionError::MissingIdentity { field: "type" });
        }
        let id = entity.resource_id();
        if id.is_empty() {
            return Err(ConversionError::MissingIdentity { field: "id" });
        }

        Ok(Resource {
            id,
            kind,
            attributes: entity.attributes(),
            relationships: entity.relationships(),
            links: entity.links(),
            meta: entity.meta(),
        })
    }

    /// Identifier pair for this resource, without metadata.
    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(self.kind.clone(), self.id.clone())
    }
}

/// Capability contract the domain layer implements to expose entities to
/// resource conversion.
///
/// The four required methods supply the canonical fields. Relationship
/// values resolve to resource identifiers only; embedding full resources
/// inside a relationship is what a document's `included` section is for.
/// `links` and `meta` default to empty for entities that carry neither.
pub trait Resourceful {
    /// Resource type name; must be non-empty.
    fn resource_type(&self) -> String;

    /// Resource identifier; must be non-empty.
    fn resource_id(&self) -> String;

    /// Domain attributes, excluding id, type, and relationships.
    fn attributes(&self) -> Attributes;

    /// Relationships to other resources.
    fn relationships(&self) -> Relationships;

    /// Resource-level links.
    fn links(&self) -> Links {
        Links::new()
    }

    /// Resource-level metadata.
    fn meta(&self) -> Meta {
        Meta::new()
    }
}
