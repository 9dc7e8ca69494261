use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{Payload, decode_fields, encode_fields};
use crate::error::{DecodeResult, EncodeResult};
use crate::schema::SchemaType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
    /// Free-form format hint (`uri`, `date-time`, ...). Not interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Regular expression source text that is known to compile.
///
/// Compiled with the `regex` crate, so ECMA-262-only constructs such as
/// lookaround are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Pattern(String);

impl Pattern {
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        Regex::new(&source)?;
        Ok(Self(source))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_regex(&self) -> Result<Regex, regex::Error> {
        Regex::new(&self.0)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(source).map_err(serde::de::Error::custom)
    }
}

impl Payload for StringSchema {
    const SCHEMA_TYPE: SchemaType = SchemaType::String;

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
    fn pattern_is_checked_at_decode() {
        let payload = StringSchema::decode(&json!({ "pattern": "^[a-z]+$" })).unwrap();
        let rx = payload.pattern.unwrap().to_regex().unwrap();
        assert!(rx.is_match("abc"));

        let err = StringSchema::decode(&json!({ "pattern": "([a-z" })).unwrap_err();
        assert_eq!(err.path(), Some("pattern"));
    }

    #[test]
    fn lengths_must_be_non_negative_integers() {
        let err = StringSchema::decode(&json!({ "minLength": -1 })).unwrap_err();
        assert_eq!(err.path(), Some("minLength"));
    }

    #[test]
    fn format_round_trips_verbatim() {
        let doc = json!({ "format": "uri", "maxLength": 2048 });
        let payload = StringSchema::decode(&doc).unwrap();
        let mut out = Map::new();
        payload.encode(&mut out).unwrap();
        assert_eq!(Value::Object(out), doc);
    }
}
