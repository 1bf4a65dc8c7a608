use jsonapi_model::{ConversionError, Resource, Resourceful};
use serde_json::Value;

/// Append-only accumulator for a document's `included` section.
///
/// Entities are converted and rendered at append time; the accumulated
/// values keep insertion order. Nothing is deduplicated: appending a
/// resource twice, or one already present in `data`, stores it twice.
///
/// Appends consume the accumulator and return the grown one, so a caller
/// that discards the result leaves no observable trace on the original.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Included {
    values: Vec<Value>,
}

impl Included {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts one entity and appends its rendered form at the tail.
    pub fn append<E: Resourceful>(mut self, entity: &E) -> Result<Self, ConversionError> {
        let resource = Resource::from_entity(entity)?;
        self.values.push(serde_json::to_value(resource)?);
        Ok(self)
    }

    /// Converts an ordered collection of entities, preserving source order.
    pub fn append_all<E: Resourceful>(mut self, entities: &[E]) -> Result<Self, ConversionError> {
        for entity in entities {
            self = self.append(entity)?;
        }
        Ok(self)
    }

    /// Number of accumulated values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Materializes the accumulated values in insertion order.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}
