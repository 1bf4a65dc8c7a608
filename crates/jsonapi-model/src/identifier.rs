use serde::{Deserialize, Serialize};

use crate::meta::Meta;

/// `{type, id}` pair identifying one resource within a document.
///
/// Relationships always reference resources by identifier, never by
/// embedding the full resource; full renditions belong in a document's
/// `included` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// Resource type name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource identifier within the type.
    pub id: String,
    /// Identifier-level metadata, omitted when empty.
    #[serde(skip_serializing_if = "Meta::is_empty", default)]
    pub meta: Meta,
}

impl ResourceIdentifier {
    /// Creates an identifier without metadata.
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            meta: Meta::new(),
        }
    }
}
