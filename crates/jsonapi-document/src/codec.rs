//! Byte-level encode/decode for document envelopes.
//!
//! Encoding renders an envelope with serde; decoding re-validates the
//! structure explicitly before typed deserialization, so a malformed
//! member fails the whole parse with a path-qualified reason instead of
//! producing a partial document.

use std::fmt;

use jsonapi_model::{Links, Meta, Resource};
use serde_json::Value;

use crate::document::{Cardinality, Document, ErrorDocument, PrimaryData};
use crate::errors::{EncodeError, ParseError};

/// Renders a success document to JSON bytes.
///
/// `data` is always emitted; `links`, `meta`, and `included` only when
/// non-empty. A `Many` document renders as an array even with zero or one
/// element.
pub fn encode(document: &Document) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(document)?)
}

/// Renders an error document to JSON bytes.
///
/// `errors` is always emitted, even when empty.
pub fn encode_errors(document: &ErrorDocument) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(document)?)
}

/// Parses a success document from JSON bytes.
///
/// The caller supplies the expected cardinality of `data`: the wire format
/// cannot distinguish a single resource from a one-element list on its
/// own. `links`, `meta`, and `included` default to empty when absent;
/// unknown top-level members are ignored.
///
/// # Errors
///
/// Returns [`ParseError`] if:
/// - The input is not valid JSON
/// - The `data` member is absent
/// - `data` does not match the requested cardinality
/// - A resource lacks a non-empty string `id` or `type`
pub fn decode(bytes: &[u8], cardinality: Cardinality) -> Result<Document, ParseError> {
    let value: Value = serde_json::from_slice(bytes)?;
    let path = Path::root();
    let Some(object) = value.as_object() else {
        return Err(path.mismatch("top-level value is not an object"));
    };

    let data = object.get("data").ok_or(ParseError::MissingData)?;
    let data = decode_primary(data, cardinality, path.push_field("data"))?;

    let links: Links = decode_member(object.get("links"), path.push_field("links"))?;
    let meta: Meta = decode_member(object.get("meta"), path.push_field("meta"))?;
    let included = match object.get("included") {
        None => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(_) => return Err(path.push_field("included").mismatch("expected an array")),
    };

    Ok(Document {
        data,
        links,
        meta,
        included,
    })
}

/// Parses an error document from JSON bytes.
///
/// `errors` must be present, though it may be an empty array. `links` and
/// `meta` default to empty when absent; unknown top-level members are
/// ignored.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid JSON, the `errors`
/// member is absent, or any element of `errors` is not an error object.
pub fn decode_errors(bytes: &[u8]) -> Result<ErrorDocument, ParseError> {
    let value: Value = serde_json::from_slice(bytes)?;
    let path = Path::root();
    let Some(object) = value.as_object() else {
        return Err(path.mismatch("top-level value is not an object"));
    };

    let errors_path = path.push_field("errors");
    let errors = match object.get("errors") {
        None => return Err(ParseError::MissingErrors),
        Some(Value::Array(items)) => {
            let mut errors = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let item_path = errors_path.push_index(index);
                if !item.is_object() {
                    return Err(item_path.mismatch("error is not an object"));
                }
                let error = serde_json::from_value(item.clone())
                    .map_err(|err| item_path.mismatch(err))?;
                errors.push(error);
            }
            errors
        }
        Some(_) => return Err(errors_path.mismatch("expected an array")),
    };

    let links: Links = decode_member(object.get("links"), path.push_field("links"))?;
    let meta: Meta = decode_member(object.get("meta"), path.push_field("meta"))?;

    Ok(ErrorDocument {
        errors,
        links,
        meta,
    })
}

fn decode_primary(
    value: &Value,
    cardinality: Cardinality,
    path: Path,
) -> Result<PrimaryData, ParseError> {
    match cardinality {
        Cardinality::Single => match value {
            Value::Object(_) => Ok(PrimaryData::Single(decode_resource(value, &path)?)),
            Value::Array(_) => {
                Err(path.mismatch("expected a single resource object, found an array"))
            }
            _ => Err(path.mismatch("expected a resource object")),
        },
        Cardinality::Many => match value {
            Value::Array(items) => {
                let mut resources = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    resources.push(decode_resource(item, &path.push_index(index))?);
                }
                Ok(PrimaryData::Many(resources))
            }
            Value::Object(_) => {
                Err(path.mismatch("expected an array of resources, found a single object"))
            }
            _ => Err(path.mismatch("expected an array of resources")),
        },
    }
}

fn decode_resource(value: &Value, path: &Path) -> Result<Resource, ParseError> {
    let Some(object) = value.as_object() else {
        return Err(path.mismatch("resource is not an object"));
    };

    // id and type must be non-empty strings before typed deserialization
    for member in ["id", "type"] {
        match object.get(member) {
            None => {
                return Err(path.mismatch(format_args!("resource has no `{member}` member")));
            }
            Some(Value::String(s)) if !s.is_empty() => {}
            Some(Value::String(_)) => {
                return Err(path.mismatch(format_args!("resource `{member}` is empty")));
            }
            Some(_) => {
                return Err(path.mismatch(format_args!("resource `{member}` is not a string")));
            }
        }
    }

    serde_json::from_value(value.clone()).map_err(|err| path.mismatch(err))
}

fn decode_member<T>(value: Option<&Value>, path: Path) -> Result<T, ParseError>
where
    T: Default + serde::de::DeserializeOwned,
{
    match value {
        None => Ok(T::default()),
        Some(value) => serde_json::from_value(value.clone()).map_err(|err| path.mismatch(err)),
    }
}

/// Helper for building JSON paths in shape-mismatch reports.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{}]", index));
        Self { segments }
    }

    fn mismatch(&self, reason: impl fmt::Display) -> ParseError {
        ParseError::ShapeMismatch(format!("{}: {}", self, reason))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "document")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}
