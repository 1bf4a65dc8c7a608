//! Canonical JSON:API resource model primitives.
//!
//! These types cover every member shape below the top-level document
//! envelope: the key-ordered `meta` and `links` containers, resource
//! identifiers, relationship linkage, the canonical resource shape, and
//! error objects. The envelopes that wrap them (`data`, `errors`,
//! `included`) live in `jsonapi-document`.
//!
//! Core invariants:
//! - `id` and `type` of a resource are non-empty and always serialized
//! - `attributes`/`relationships`/`links`/`meta` are omitted when empty,
//!   never emitted as `{}`
//! - mappings keep insertion order on the wire; merging two mappings is a
//!   left-biased key union
//!
#![deny(missing_docs)]

/// Error object type for failure payloads.
pub mod error;
/// Resource identifier pairs used for linkage.
pub mod identifier;
/// Key-ordered link containers.
pub mod links;
/// Key-ordered metadata containers.
pub mod meta;
/// Canonical resource shape and domain conversion.
pub mod resource;
/// Validation errors raised during conversion.
pub mod validation;

pub use error::ErrorObject;
pub use identifier::ResourceIdentifier;
pub use links::{Link, Links};
pub use meta::{Meta, MetaFragment};
pub use resource::{Attributes, Linkage, Relationship, Relationships, Resource, Resourceful};
pub use validation::ConversionError;
