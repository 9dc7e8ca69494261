//! Kind-specific payloads and the contract they plug into the union with.
//!
//! A payload reads and writes only its own keywords. The document it decodes
//! from is the whole schema object (`type`, `description` and all), so
//! unknown keys are ignored rather than rejected; on encode a payload must
//! never write `type` or `description`.
pub mod array;
pub mod boolean;
pub mod enumeration;
pub mod integer;
pub mod null;
pub mod number;
pub mod object;
pub mod string;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
use crate::path_de::{self, PathError};
use crate::schema::{DESCRIPTION_KEY, SchemaType, TYPE_KEY};

pub use array::ArraySchema;
pub use boolean::BooleanSchema;
pub use enumeration::EnumSchema;
pub use integer::IntegerSchema;
pub use null::NullSchema;
pub use number::{Bound, NumberSchema};
pub use object::ObjectSchema;
pub use string::{Pattern, StringSchema};

/// Decode-from-document / encode-to-document, as required by [`crate::Schema`].
pub trait Payload: Sized {
    const SCHEMA_TYPE: SchemaType;

    /// Read this kind's keywords out of a full schema document.
    fn decode(doc: &Value) -> DecodeResult<Self>;

    /// Write this kind's keywords into `doc`, next to `type`/`description`.
    fn encode(&self, doc: &mut Map<String, Value>) -> EncodeResult<()>;
}

/// serde-backed decode; failures carry the JSON path of the offending field.
pub fn decode_fields<T: DeserializeOwned>(kind: SchemaType, doc: &Value) -> DecodeResult<T> {
    path_de::from_value_with_path(doc)
        .map_err(|PathError { path, message }| DecodeError::Payload { kind, path, message })
}

/// serde-backed encode; the payload must serialize to a JSON object.
pub fn encode_fields<T: Serialize>(
    kind: SchemaType,
    payload: &T,
    doc: &mut Map<String, Value>,
) -> EncodeResult<()> {
    let value = serde_json::to_value(payload).map_err(|source| EncodeError::Payload { kind, source })?;
    let Value::Object(fields) = value else {
        return Err(EncodeError::NotAnObject { kind });
    };
    merge_fields(kind, fields, doc)
}

pub(crate) fn merge_fields(
    kind: SchemaType,
    fields: Map<String, Value>,
    doc: &mut Map<String, Value>,
) -> EncodeResult<()> {
    for (key, value) in fields {
        if key == TYPE_KEY || key == DESCRIPTION_KEY {
            return Err(EncodeError::ReservedKey { kind, key });
        }
        doc.insert(key, value);
    }
    Ok(())
}

/// A payload-level rule violation found after serde accepted the fields.
pub(crate) fn invalid_field(kind: SchemaType, path: &str, message: impl Into<String>) -> DecodeError {
    DecodeError::Payload { kind, path: path.to_string(), message: message.into() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Squatter {
        r#type: &'static str,
    }

    #[derive(Serialize)]
    struct Scalar(u8);

    #[test]
    fn reserved_keys_cannot_be_claimed() {
        let mut doc = Map::new();
        let err = encode_fields(SchemaType::String, &Squatter { r#type: "x" }, &mut doc).unwrap_err();
        assert!(matches!(err, EncodeError::ReservedKey { ref key, .. } if key == "type"));

        let mut fields = Map::new();
        fields.insert("description".into(), json!("mine"));
        let err = merge_fields(SchemaType::Null, fields, &mut doc).unwrap_err();
        assert!(matches!(err, EncodeError::ReservedKey { ref key, .. } if key == "description"));
    }

    #[test]
    fn payload_must_encode_to_an_object() {
        let mut doc = Map::new();
        let err = encode_fields(SchemaType::Integer, &Scalar(1), &mut doc).unwrap_err();
        assert!(matches!(err, EncodeError::NotAnObject { kind: SchemaType::Integer }));
    }

    #[test]
    fn decode_ignores_foreign_keys() {
        let doc = json!({ "type": "integer", "description": "d", "minLength": 3, "minimum": 2 });
        let payload: IntegerSchema = decode_fields(SchemaType::Integer, &doc).unwrap();
        assert_eq!(payload.minimum, Some(2));
    }
}
