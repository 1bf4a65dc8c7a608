use jsonapi_model::{ConversionError, ErrorObject, Links, Meta, Resource, Resourceful};
use serde::Serialize;
use serde_json::Value;

use crate::included::Included;

/// Shape of a document's primary `data` member.
///
/// The variant is decided when the document is built and preserved through
/// encode and decode; a one-element `Many` never collapses into `Single`
/// on the wire, and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrimaryData {
    /// Exactly one resource, rendered as a JSON object.
    Single(Resource),
    /// An ordered sequence of resources, rendered as a JSON array even
    /// when it holds zero or one element.
    Many(Vec<Resource>),
}

/// Cardinality tag for the primary data of a document.
///
/// The wire format cannot distinguish a single resource from a one-element
/// list by itself, so decoding takes the expected tag up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// `data` is one resource object.
    Single,
    /// `data` is an array of resources.
    Many,
}

/// Top-level success envelope.
///
/// `data` is always serialized; `links`, `meta`, and `included` are
/// omitted when empty, never emitted as `{}` or `[]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Primary data.
    pub data: PrimaryData,
    /// Document-level links, omitted when empty.
    #[serde(skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    /// Document-level metadata, omitted when empty.
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
    /// Pre-rendered compound-document resources, omitted when empty.
    /// Order-preserving; duplicates are permitted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Value>,
}

impl Document {
    /// Composes a document around already-wrapped primary data.
    ///
    /// Links, metadata, and included resources start empty and are
    /// attached via the `with_*` setters.
    pub fn new(data: PrimaryData) -> Self {
        Self {
            data,
            links: Links::new(),
            meta: Meta::new(),
            included: Vec::new(),
        }
    }

    /// Wraps one resource in a single-cardinality document.
    pub fn single(resource: Resource) -> Self {
        Self::new(PrimaryData::Single(resource))
    }

    /// Wraps an ordered sequence of resources; the empty sequence is valid
    /// and renders as `"data": []`.
    pub fn many(resources: Vec<Resource>) -> Self {
        Self::new(PrimaryData::Many(resources))
    }

    /// Converts one entity and wraps it as a single-resource document.
    pub fn from_entity<E: Resourceful>(entity: &E) -> Result<Self, ConversionError> {
        Ok(Self::single(Resource::from_entity(entity)?))
    }

    /// Converts an ordered collection of entities into a list document,
    /// preserving source order.
    pub fn from_entities<E: Resourceful>(entities: &[E]) -> Result<Self, ConversionError> {
        let resources = entities
            .iter()
            .map(Resource::from_entity)
            .collect::<Result<_, _>>()?;
        Ok(Self::many(resources))
    }

    /// Cardinality tag of the primary data.
    pub fn cardinality(&self) -> Cardinality {
        match self.data {
            PrimaryData::Single(_) => Cardinality::Single,
            PrimaryData::Many(_) => Cardinality::Many,
        }
    }

    /// Attaches document-level links.
    pub fn with_links(mut self, links: Links) -> Self {
        self.links = links;
        self
    }

    /// Attaches document-level metadata.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Attaches accumulated compound-document resources.
    pub fn with_included(mut self, included: Included) -> Self {
        self.included = included.into_values();
        self
    }
}

/// Top-level failure envelope.
///
/// `errors` is always serialized, even when empty; `links` and `meta`
/// follow the usual omission rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDocument {
    /// Application errors, in order.
    pub errors: Vec<ErrorObject>,
    /// Document-level links, omitted when empty.
    #[serde(skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    /// Document-level metadata, omitted when empty.
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl ErrorDocument {
    /// Wraps an ordered sequence of errors; the empty sequence is valid.
    pub fn new(errors: Vec<ErrorObject>) -> Self {
        Self {
            errors,
            links: Links::new(),
            meta: Meta::new(),
        }
    }

    /// Attaches document-level links.
    pub fn with_links(mut self, links: Links) -> Self {
        self.links = links;
        self
    }

    /// Attaches document-level metadata.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}
