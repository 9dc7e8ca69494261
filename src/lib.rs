//! JSON Schema documents as a closed union of eight kinds.
//!
//! A [`Schema`] is exactly one of array, boolean, enum, integer, null, number,
//! object or string, plus an optional description. It decodes from and encodes
//! to plain JSON Schema text; enumerations are recognized by their `enum`
//! keyword and never carry a `type` on the wire.
pub mod error;
pub mod kinds;
pub mod path_de;
pub mod schema;

pub use error::{DecodeError, EncodeError};
pub use kinds::{
    ArraySchema, BooleanSchema, Bound, EnumSchema, IntegerSchema, NullSchema, NumberSchema,
    ObjectSchema, Pattern, Payload, StringSchema,
};
pub use schema::{Schema, SchemaKind, SchemaType, resolve_schema_type};
