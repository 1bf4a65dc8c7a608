use thiserror::Error;

/// Errors raised while converting domain entities to wire resources.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The entity reported an empty type or id.
    #[error("entity has no usable {field}")]
    MissingIdentity {
        /// Which identity field was empty.
        field: &'static str,
    },
    /// A converted value could not be rendered to JSON.
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}
