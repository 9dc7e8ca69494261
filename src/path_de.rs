use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DecodeError;

/// A deserialization failure together with the JSON path it happened at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathError {
    pub path: String,
    pub message: String,
}

/// Deserialize a borrowed document with JSON-path context in errors.
pub fn from_value_with_path<T: DeserializeOwned>(doc: &Value) -> Result<T, PathError> {
    match serde_path_to_error::deserialize::<_, T>(doc) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(PathError { path, message: err.into_inner().to_string() })
        }
    }
}

/// Raw bytes → document. UTF-8 is checked before any JSON parsing happens.
pub fn document_from_slice(bytes: &[u8]) -> Result<Value, DecodeError> {
    let text = std::str::from_utf8(bytes)?;
    document_from_str(text)
}

pub fn document_from_str(text: &str) -> Result<Value, DecodeError> {
    serde_json::from_str::<Value>(text).map_err(DecodeError::Syntax)
}
