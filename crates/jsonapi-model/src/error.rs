use serde::{Deserialize, Serialize};

use crate::links::Links;
use crate::meta::Meta;

/// One application error inside an error document.
///
/// Every member is optional; an error with nothing populated serializes to
/// `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// Unique identifier for this occurrence of the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Applicable HTTP status code, expressed as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Application-specific error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Short, human-readable summary of the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Error-level links, omitted when empty.
    #[serde(skip_serializing_if = "Links::is_empty", default)]
    pub links: Links,
    /// Error-level metadata, omitted when empty.
    #[serde(skip_serializing_if = "Meta::is_empty", default)]
    pub meta: Meta,
}
