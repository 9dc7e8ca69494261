use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Payload, decode_fields, encode_fields};
use crate::error::{DecodeResult, EncodeResult};
use crate::schema::SchemaType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<i64>,
    /// JSON Schema requires a strictly positive divisor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<NonZeroU64>,
}

impl Payload for IntegerSchema {
    const SCHEMA_TYPE: SchemaType = SchemaType::Integer;

    fn decode(doc: &Value) -> DecodeResult<Self> {
        decode_fields(Self::SCHEMA_TYPE, doc)
    }
    fn encode(&self, doc: &mut Map<String, Value>) -> EncodeResult<()> {
        encode_fields(Self::SCHEMA_TYPE, self, doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bounds_decode_by_keyword() {
        let doc = json!({ "type": "integer", "minimum": -3, "exclusiveMaximum": 10, "multipleOf": 2 });
        let payload = IntegerSchema::decode(&doc).unwrap();
        assert_eq!(payload.minimum, Some(-3));
        assert_eq!(payload.maximum, None);
        assert_eq!(payload.exclusive_maximum, Some(10));
        assert_eq!(payload.multiple_of, NonZeroU64::new(2));
    }

    #[test]
    fn fractional_bound_is_malformed() {
        let err = IntegerSchema::decode(&json!({ "maximum": 1.5 })).unwrap_err();
        assert_eq!(err.path(), Some("maximum"));
    }

    #[test]
    fn zero_divisor_is_malformed() {
        let err = IntegerSchema::decode(&json!({ "multipleOf": 0 })).unwrap_err();
        assert_eq!(err.path(), Some("multipleOf"));
    }

    #[test]
    fn absent_bounds_are_not_written() {
        let mut doc = Map::new();
        IntegerSchema { maximum: Some(7), ..Default::default() }.encode(&mut doc).unwrap();
        assert_eq!(Value::Object(doc), json!({ "maximum": 7 }));
    }
}
