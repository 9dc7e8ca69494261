use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{Payload, decode_fields, encode_fields};
use crate::error::{DecodeResult, EncodeError, EncodeResult};
use crate::schema::SchemaType;

/// A closed set of allowed JSON values.
///
/// JSON Schema has no `type: "enum"`; the `enum` keyword itself is what marks
/// a document as this kind, so this payload is the one that writes it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumSchema {
    #[serde(rename = "enum", deserialize_with = "non_empty_values")]
    pub values: Vec<Value>,
}

impl EnumSchema {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

fn non_empty_values<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Value>, D::Error> {
    let values = Vec::<Value>::deserialize(deserializer)?;
    if values.is_empty() {
        return Err(D::Error::invalid_length(0, &"at least one value"));
    }
    Ok(values)
}

impl Payload for EnumSchema {
    const SCHEMA_TYPE: SchemaType = SchemaType::Enum;

    fn decode(doc: &Value) -> DecodeResult<Self> {
        decode_fields(Self::SCHEMA_TYPE, doc)
    }

    fn encode(&self, doc: &mut Map<String, Value>) -> EncodeResult<()> {
        if self.values.is_empty() {
            return Err(EncodeError::EmptyEnum);
        }
        encode_fields(Self::SCHEMA_TYPE, self, doc)
    }
}
