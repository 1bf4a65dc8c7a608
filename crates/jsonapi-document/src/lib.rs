//! Top-level JSON:API document envelopes and byte-level codec.
//!
//! This crate provides:
//! - [`Document`] and [`ErrorDocument`] envelopes over the `jsonapi-model` types
//! - The append-only [`Included`] accumulator for compound documents
//! - [`encode`]/[`decode`] entry points with an explicit cardinality hint
//! - Pagination link construction for collection documents
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi_document::{decode, encode, Cardinality, Document};
//! use jsonapi_model::{Attributes, Relationships, Resourceful};
//!
//! struct Person {
//!     id: String,
//!     name: String,
//! }
//!
//! impl Resourceful for Person {
//!     fn resource_type(&self) -> String {
//!         "person".to_string()
//!     }
//!     fn resource_id(&self) -> String {
//!         self.id.clone()
//!     }
//!     fn attributes(&self) -> Attributes {
//!         let mut attributes = Attributes::new();
//!         attributes.insert("name".to_string(), self.name.clone().into());
//!         attributes
//!     }
//!     fn relationships(&self) -> Relationships {
//!         Relationships::new()
//!     }
//! }
//!
//! let ana = Person { id: "9".to_string(), name: "Ana".to_string() };
//! let document = Document::from_entity(&ana)?;
//! let bytes = encode(&document)?;
//! assert_eq!(
//!     std::str::from_utf8(&bytes)?,
//!     r#"{"data":{"id":"9","type":"person","attributes":{"name":"Ana"}}}"#
//! );
//!
//! let parsed = decode(&bytes, Cardinality::Single)?;
//! assert_eq!(parsed, document);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Key Types
//!
//! - [`Document`] - Success envelope wrapping one resource or a sequence
//! - [`ErrorDocument`] - Failure envelope wrapping application errors
//! - [`Included`] - Accumulator for compound-document resources
//! - [`Cardinality`] - Decode-time hint for the shape of `data`
//!
//! All operations are pure, synchronous transformations over owned values;
//! transport, routing, and persistence belong to the caller.

#![deny(missing_docs)]

/// Byte-level encode/decode entry points.
pub mod codec;
/// Document envelope types and builders.
pub mod document;
/// Error types for codec operations.
pub mod errors;
/// Compound-document accumulator.
pub mod included;
/// Pagination link construction.
pub mod pagination;

pub use codec::{decode, decode_errors, encode, encode_errors};
pub use document::{Cardinality, Document, ErrorDocument, PrimaryData};
pub use errors::{EncodeError, ParseError};
pub use included::Included;
pub use pagination::{pagination_links, Pagination, Strategy};
