use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Payload, decode_fields, encode_fields};
use crate::error::{DecodeResult, EncodeResult};
use crate::schema::SchemaType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullSchema {}

impl Payload for NullSchema {
    const SCHEMA_TYPE: SchemaType = SchemaType::Null;

    fn decode(doc: &Value) -> DecodeResult<Self> {
        decode_fields(Self::SCHEMA_TYPE, doc)
    }
    fn encode(&self, doc: &mut Map<String, Value>) -> EncodeResult<()> {
        encode_fields(Self::SCHEMA_TYPE, self, doc)
    }
}
