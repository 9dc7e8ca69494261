use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::{Payload, decode_fields, encode_fields, invalid_field};
use crate::error::{DecodeResult, EncodeResult};
use crate::schema::SchemaType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Bound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Bound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<Bound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<Bound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Bound>,
}

/// A numeric keyword value, kept as the JSON number it was written as.
///
/// Integers stay integers (`9007199254740993` is not rounded through `f64`),
/// so re-encoding writes back the same literal. Equality is on that literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bound(Number);

impl Bound {
    /// `None` for NaN/∞, which JSON cannot carry. Whole values in `i64`
    /// range become integer literals.
    pub fn from_f64(n: f64) -> Option<Self> {
        if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            return Some(Self(Number::from(n as i64)));
        }
        Number::from_f64(n).map(Self)
    }

    pub fn as_number(&self) -> &Number {
        &self.0
    }

    /// The value for numeric comparison; large integers lose precision here.
    pub fn value(&self) -> OrderedFloat<f64> {
        OrderedFloat(self.0.as_f64().unwrap_or(f64::NAN))
    }
}

impl From<i64> for Bound {
    fn from(n: i64) -> Self {
        Self(Number::from(n))
    }
}

impl From<u64> for Bound {
    fn from(n: u64) -> Self {
        Self(Number::from(n))
    }
}

impl Payload for NumberSchema {
    const SCHEMA_TYPE: SchemaType = SchemaType::Number;

    fn decode(doc: &Value) -> DecodeResult<Self> {
        let payload: Self = decode_fields(Self::SCHEMA_TYPE, doc)?;
        if let Some(divisor) = &payload.multiple_of {
            if divisor.value() <= OrderedFloat(0.0) {
                return Err(invalid_field(
                    Self::SCHEMA_TYPE,
                    "multipleOf",
                    format!("must be strictly positive, got {}", divisor.as_number()),
                ));
            }
        }
        Ok(payload)
    }

    fn encode(&self, doc: &mut Map<String, Value>) -> EncodeResult<()> {
        encode_fields(Self::SCHEMA_TYPE, self, doc)
    }
}
