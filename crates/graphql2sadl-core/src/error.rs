//! Error types for schema translation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validate::ValidationError;

/// Stable, machine-readable error codes.
///
/// Variant names and their serialized `snake_case` strings are part of the
/// public API and must not change across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// The SDL text could not be parsed.
    ParseError,
    /// A top-level definition has no SADL representation.
    UnsupportedDefinition,
    /// A field type shape is not covered by the mapping rules.
    UnsupportedTypeShape,
    /// The translated schema was rejected by the validator.
    ValidationError,
    /// JSON serialization failed.
    JsonError,
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("GraphQL parsing error: {0}")]
    Parse(String),

    #[error("Unsupported {kind} definition: {definition}")]
    UnsupportedDefinition { kind: String, definition: String },

    #[error("Unsupported type shape for field {type_name}.{field}: {shape}")]
    UnsupportedTypeShape {
        type_name: String,
        field: String,
        shape: String,
    },

    #[error("Invalid SADL schema: {0}")]
    Validation(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranslateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TranslateError::Parse(_) => ErrorCode::ParseError,
            TranslateError::UnsupportedDefinition { .. } => ErrorCode::UnsupportedDefinition,
            TranslateError::UnsupportedTypeShape { .. } => ErrorCode::UnsupportedTypeShape,
            TranslateError::Validation(_) => ErrorCode::ValidationError,
            TranslateError::Json(_) => ErrorCode::JsonError,
        }
    }
}
