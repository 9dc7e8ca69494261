//! The schema union: one value, exactly one of eight JSON Schema kinds.
//!
//! Decoding is discriminate-then-dispatch:
//! 1. resolve the [`SchemaType`] from the document ([`resolve_schema_type`]),
//! 2. read the optional `description`,
//! 3. hand the *same* document to the selected kind's [`Payload`] decoder.
//!
//! Encoding mirrors it, except that enumerations never write `type`: the enum
//! payload writes its own `enum` keyword, which is what decoding keys on.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{DecodeError, DecodeResult, EncodeResult};
use crate::kinds::{
    ArraySchema, BooleanSchema, EnumSchema, IntegerSchema, NullSchema, NumberSchema,
    ObjectSchema, Payload, StringSchema,
};
use crate::path_de;

pub const TYPE_KEY: &str = "type";
pub const DESCRIPTION_KEY: &str = "description";
pub const ENUM_KEY: &str = "enum";

// ————————————————————————————————————————————————————————————————————————————
// DISCRIMINANT
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemaType {
    Array,
    Boolean,
    Enum,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl SchemaType {
    pub const ALL: [SchemaType; 8] = [
        SchemaType::Array,
        SchemaType::Boolean,
        SchemaType::Enum,
        SchemaType::Integer,
        SchemaType::Null,
        SchemaType::Number,
        SchemaType::Object,
        SchemaType::String,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SchemaType::Array => "array",
            SchemaType::Boolean => "boolean",
            SchemaType::Enum => "enum",
            SchemaType::Integer => "integer",
            SchemaType::Null => "null",
            SchemaType::Number => "number",
            SchemaType::Object => "object",
            SchemaType::String => "string",
        }
    }

    /// The wire value of the `type` field. `None` for [`SchemaType::Enum`],
    /// which is signaled by the presence of an `enum` key instead.
    pub fn type_literal(self) -> Option<&'static str> {
        match self {
            SchemaType::Enum => None,
            other => Some(other.name()),
        }
    }

    /// Inverse of [`SchemaType::type_literal`]. `"enum"` is not a `type` value.
    pub fn from_type_literal(literal: &str) -> Option<Self> {
        match literal {
            "array" => Some(SchemaType::Array),
            "boolean" => Some(SchemaType::Boolean),
            "integer" => Some(SchemaType::Integer),
            "null" => Some(SchemaType::Null),
            "number" => Some(SchemaType::Number),
            "object" => Some(SchemaType::Object),
            "string" => Some(SchemaType::String),
            _ => None,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decide which kind a schema document describes.
///
/// Priority order:
/// 1. an `enum` key forces [`SchemaType::Enum`], whatever `type` says;
/// 2. otherwise `type` must hold one of the seven type literals.
pub fn resolve_schema_type(doc: &Map<String, Value>) -> DecodeResult<SchemaType> {
    if doc.contains_key(ENUM_KEY) {
        if let Some(ignored) = doc.get(TYPE_KEY) {
            tracing::debug!(%ignored, "`enum` keyword present; ignoring `type`");
        }
        return Ok(SchemaType::Enum);
    }
    match doc.get(TYPE_KEY) {
        None => Err(DecodeError::MissingDiscriminant),
        Some(Value::String(literal)) => SchemaType::from_type_literal(literal).ok_or_else(|| {
            DecodeError::UnrecognizedDiscriminant { found: format!("{literal:?}") }
        }),
        Some(other) => Err(DecodeError::UnrecognizedDiscriminant { found: other.to_string() }),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// UNION
// ————————————————————————————————————————————————————————————————————————————

/// The populated payload. One variant per kind, so exactly one slot exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaKind {
    Array(ArraySchema),
    Boolean(BooleanSchema),
    Enum(EnumSchema),
    Integer(IntegerSchema),
    Null(NullSchema),
    Number(NumberSchema),
    Object(ObjectSchema),
    String(StringSchema),
}

impl SchemaKind {
    pub fn schema_type(&self) -> SchemaType {
        match self {
            SchemaKind::Array(_) => SchemaType::Array,
            SchemaKind::Boolean(_) => SchemaType::Boolean,
            SchemaKind::Enum(_) => SchemaType::Enum,
            SchemaKind::Integer(_) => SchemaType::Integer,
            SchemaKind::Null(_) => SchemaType::Null,
            SchemaKind::Number(_) => SchemaType::Number,
            SchemaKind::Object(_) => SchemaType::Object,
            SchemaKind::String(_) => SchemaType::String,
        }
    }

    fn decode(schema_type: SchemaType, doc: &Value) -> DecodeResult<Self> {
        Ok(match schema_type {
            SchemaType::Array => SchemaKind::Array(ArraySchema::decode(doc)?),
            SchemaType::Boolean => SchemaKind::Boolean(BooleanSchema::decode(doc)?),
            SchemaType::Enum => SchemaKind::Enum(EnumSchema::decode(doc)?),
            SchemaType::Integer => SchemaKind::Integer(IntegerSchema::decode(doc)?),
            SchemaType::Null => SchemaKind::Null(NullSchema::decode(doc)?),
            SchemaType::Number => SchemaKind::Number(NumberSchema::decode(doc)?),
            SchemaType::Object => SchemaKind::Object(ObjectSchema::decode(doc)?),
            SchemaType::String => SchemaKind::String(StringSchema::decode(doc)?),
        })
    }

    fn encode(&self, doc: &mut Map<String, Value>) -> EncodeResult<()> {
        match self {
            SchemaKind::Array(payload) => payload.encode(doc),
            SchemaKind::Boolean(payload) => payload.encode(doc),
            SchemaKind::Enum(payload) => payload.encode(doc),
            SchemaKind::Integer(payload) => payload.encode(doc),
            SchemaKind::Null(payload) => payload.encode(doc),
            SchemaKind::Number(payload) => payload.encode(doc),
            SchemaKind::Object(payload) => payload.encode(doc),
            SchemaKind::String(payload) => payload.encode(doc),
        }
    }
}

macro_rules! kind_from_payload {
    ($($payload:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for SchemaKind {
                fn from(payload: $payload) -> Self { SchemaKind::$variant(payload) }
            }
        )*
    };
}

kind_from_payload! {
    ArraySchema => Array,
    BooleanSchema => Boolean,
    EnumSchema => Enum,
    IntegerSchema => Integer,
    NullSchema => Null,
    NumberSchema => Number,
    ObjectSchema => Object,
    StringSchema => String,
}

/// A JSON Schema document of exactly one kind, plus an optional description.
///
/// Immutable once built; construct with [`Schema::new`] or decode one.
///
/// ```
/// use json_schema_union::{Schema, SchemaType};
///
/// let schema: Schema = r#"{"type":"integer","description":"age"}"#.parse().unwrap();
/// assert_eq!(schema.schema_type(), SchemaType::Integer);
/// assert_eq!(schema.description(), Some("age"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    description: Option<String>,
    kind: SchemaKind,
}

impl Schema {
    pub fn new(kind: impl Into<SchemaKind>) -> Self {
        Self { description: None, kind: kind.into() }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self { description: Some(description.into()), ..self }
    }

    pub fn schema_type(&self) -> SchemaType {
        self.kind.schema_type()
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn kind(&self) -> &SchemaKind {
        &self.kind
    }
    pub fn into_kind(self) -> SchemaKind {
        self.kind
    }

    pub fn as_array(&self) -> Option<&ArraySchema> {
        match &self.kind { SchemaKind::Array(x) => Some(x), _ => None }
    }
    pub fn as_boolean(&self) -> Option<&BooleanSchema> {
        match &self.kind { SchemaKind::Boolean(x) => Some(x), _ => None }
    }
    pub fn as_enum(&self) -> Option<&EnumSchema> {
        match &self.kind { SchemaKind::Enum(x) => Some(x), _ => None }
    }
    pub fn as_integer(&self) -> Option<&IntegerSchema> {
        match &self.kind { SchemaKind::Integer(x) => Some(x), _ => None }
    }
    pub fn as_null(&self) -> Option<&NullSchema> {
        match &self.kind { SchemaKind::Null(x) => Some(x), _ => None }
    }
    pub fn as_number(&self) -> Option<&NumberSchema> {
        match &self.kind { SchemaKind::Number(x) => Some(x), _ => None }
    }
    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match &self.kind { SchemaKind::Object(x) => Some(x), _ => None }
    }
    pub fn as_string(&self) -> Option<&StringSchema> {
        match &self.kind { SchemaKind::String(x) => Some(x), _ => None }
    }

    // -------------------------------- Decode -------------------------------- //

    /// Decode a parsed JSON document.
    pub fn from_value(doc: &Value) -> DecodeResult<Self> {
        let Value::Object(map) = doc else {
            return Err(DecodeError::NotAnObject { found: json_kind_name(doc) });
        };
        let schema_type = resolve_schema_type(map)?;
        tracing::trace!(kind = %schema_type, "resolved schema discriminant");
        let description = match map.get(DESCRIPTION_KEY) {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(DecodeError::InvalidDescription { found: other.to_string() });
            }
        };
        let kind = SchemaKind::decode(schema_type, doc)?;
        Ok(Self { description, kind })
    }

    /// Decode raw bytes: UTF-8 check, then JSON syntax, then [`Schema::from_value`].
    pub fn from_bytes(bytes: &[u8]) -> DecodeResult<Self> {
        let doc = path_de::document_from_slice(bytes)?;
        Self::from_value(&doc)
    }

    // -------------------------------- Encode -------------------------------- //

    /// Encode into a JSON object: `type` (never for enums), `description`,
    /// then the payload's own keys.
    pub fn to_document(&self) -> EncodeResult<Map<String, Value>> {
        let schema_type = self.schema_type();
        tracing::trace!(kind = %schema_type, "encoding schema");
        let mut doc = Map::new();
        if let Some(literal) = schema_type.type_literal() {
            doc.insert(TYPE_KEY.to_string(), Value::from(literal));
        }
        if let Some(description) = &self.description {
            doc.insert(DESCRIPTION_KEY.to_string(), Value::from(description.clone()));
        }
        self.kind.encode(&mut doc)?;
        Ok(doc)
    }

    pub fn to_value(&self) -> EncodeResult<Value> {
        self.to_document().map(Value::Object)
    }

    pub fn to_json_string(&self) -> EncodeResult<String> {
        Ok(self.to_value()?.to_string())
    }

    /// Same document as [`Self::to_json_string`], indented. Only the schema
    /// encode itself can fail.
    pub fn to_json_string_pretty(&self) -> EncodeResult<String> {
        Ok(format!("{:#}", self.to_value()?))
    }
}

impl FromStr for Schema {
    type Err = DecodeError;

    fn from_str(text: &str) -> DecodeResult<Self> {
        let doc = path_de::document_from_str(text)?;
        Self::from_value(&doc)
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let doc = self.to_document().map_err(serde::ser::Error::custom)?;
        doc.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = Value::deserialize(deserializer)?;
        Schema::from_value(&doc).map_err(serde::de::Error::custom)
    }
}

fn json_kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ------------------------------- Tests ------------------------------------ //
