use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Payload, decode_fields, encode_fields};
use crate::error::{DecodeResult, EncodeResult};
use crate::schema::SchemaType;

/// `{"type": "boolean"}` carries no keywords of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanSchema {}

impl Payload for BooleanSchema {
    const SCHEMA_TYPE: SchemaType = SchemaType::Boolean;

    fn decode(doc: &Value) -> DecodeResult<Self> {
        decode_fields(Self::SCHEMA_TYPE, doc)
    }
    fn encode(&self, doc: &mut Map<String, Value>) -> EncodeResult<()> {
        encode_fields(Self::SCHEMA_TYPE, self, doc)
    }
}
