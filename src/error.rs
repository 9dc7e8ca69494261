//! Decode/encode failures for the schema union.
//!
//! Every failure aborts the whole operation; there is no partial result.
use thiserror::Error;

use crate::schema::SchemaType;

/// Failure while turning text or a JSON document into a [`crate::Schema`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Raw input was not valid UTF-8. Raised before any JSON parsing.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// Input was UTF-8 but not well-formed JSON text.
    #[error("malformed JSON text: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("expected a JSON object for a schema, found {found}")]
    NotAnObject { found: &'static str },

    /// Neither a `type` nor an `enum` key is present.
    #[error("missing discriminant: schema has neither a `type` nor an `enum` key")]
    MissingDiscriminant,

    #[error(
        "unrecognized discriminant: `type` is {found}, expected one of \
         \"array\", \"boolean\", \"integer\", \"null\", \"number\", \"object\", \"string\""
    )]
    UnrecognizedDiscriminant { found: String },

    #[error("`description` must be a string, found {found}")]
    InvalidDescription { found: String },

    /// The selected variant's own decoder rejected the document.
    #[error("invalid {kind} schema at JSON path {path} → {message}")]
    Payload {
        kind: SchemaType,
        path: String,
        message: String,
    },
}

impl DecodeError {
    /// The offending field or JSON path, when the failure is tied to one.
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::UnrecognizedDiscriminant { .. } => Some("type"),
            DecodeError::InvalidDescription { .. } => Some("description"),
            DecodeError::Payload { path, .. } => Some(path.as_str()),
            _ => None,
        }
    }
}

/// Failure while turning a [`crate::Schema`] back into a JSON document.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A payload tried to write `type` or `description`, which belong to the union.
    #[error("{kind} schema payload wrote reserved key `{key}`")]
    ReservedKey { kind: SchemaType, key: String },

    #[error("enum schema has no values")]
    EmptyEnum,

    #[error("{kind} schema payload did not encode to a JSON object")]
    NotAnObject { kind: SchemaType },

    #[error("failed to encode {kind} schema: {source}")]
    Payload {
        kind: SchemaType,
        #[source]
        source: serde_json::Error,
    },
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;
