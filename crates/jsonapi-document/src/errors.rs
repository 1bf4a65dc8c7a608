use thiserror::Error;

/// Errors that can occur while decoding a document from bytes.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The top-level object has no `data` member.
    #[error("document has no `data` member")]
    MissingData,
    /// The top-level object has no `errors` member.
    #[error("error document has no `errors` member")]
    MissingErrors,
    /// A member is present but does not match the requested shape.
    #[error("shape mismatch at {0}")]
    ShapeMismatch(String),
    /// The input is not syntactically valid JSON.
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// Errors that can occur while encoding a document to bytes.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The document could not be rendered to JSON text.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
