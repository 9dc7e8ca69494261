use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Payload, decode_fields, encode_fields};
use crate::error::{DecodeResult, EncodeResult};
use crate::schema::{Schema, SchemaType};

/// Property order is kept as written so re-encoded documents read the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
}

impl ObjectSchema {
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.as_ref()?.get(name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.as_ref().is_some_and(|r| r.iter().any(|x| x == name))
    }
}

impl Payload for ObjectSchema {
    const SCHEMA_TYPE: SchemaType = SchemaType::Object;

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
    fn properties_keep_document_order() {
        let doc = json!({
            "type": "object",
            "properties": {
                "zeta": { "type": "string" },
                "alpha": { "type": "integer", "description": "age" }
            },
            "required": ["alpha"]
        });
        let payload = ObjectSchema::decode(&doc).unwrap();
        let names: Vec<_> = payload.properties.as_ref().unwrap().keys().cloned().collect();
        assert_eq!(names, ["zeta", "alpha"]);
        assert_eq!(payload.property("alpha").unwrap().description(), Some("age"));
        assert!(payload.is_required("alpha"));
        assert!(!payload.is_required("zeta"));

        let mut out = Map::new();
        out.insert("type".into(), json!("object"));
        payload.encode(&mut out).unwrap();
        assert_eq!(Value::Object(out), doc);
    }

    #[test]
    fn empty_properties_survive_reencode() {
        let doc = json!({ "properties": {} });
        let payload = ObjectSchema::decode(&doc).unwrap();
        let mut out = Map::new();
        payload.encode(&mut out).unwrap();
        assert_eq!(Value::Object(out), doc);
    }

    #[test]
    fn property_without_discriminant_fails() {
        let doc = json!({ "properties": { "name": { "description": "?" } } });
        let err = ObjectSchema::decode(&doc).unwrap_err();
        assert_eq!(err.path(), Some("properties.name"));
    }
}
