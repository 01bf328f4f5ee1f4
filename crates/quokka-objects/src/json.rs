//! Thin bridge between typed values and their canonical JSON text.
//!
//! Serialization goes through `serde_json`; the functions here exist to give
//! callers a stable pair of entry points with a single error type. The
//! deserialization direction reconstructs a typed value from text — the
//! target type supplies the shared behavior, the JSON supplies the fields.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure converting between a typed value and JSON text.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be serialized (non-string map keys, a failing
    /// `Serialize` implementation, and similar).
    #[error("failed to serialize value to JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The text was not valid JSON, or did not match the target type's
    /// shape.
    #[error("failed to deserialize value from JSON: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Serialize a value to its canonical JSON text form.
///
/// # Errors
///
/// [`JsonError::Serialize`] if the value's `Serialize` implementation fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Reconstruct a typed value from JSON text.
///
/// The deserialized value is indistinguishable from one constructed
/// directly: all of the target type's inherent methods apply to the parsed
/// fields (for example, a [`crate::Rectangle`] restored this way computes
/// its `area` as usual).
///
/// # Errors
///
/// [`JsonError::Deserialize`] if the text is not valid JSON or does not
/// match the target type.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    serde_json::from_str(text).map_err(JsonError::Deserialize)
}
