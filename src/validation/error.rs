//! Field-level validation failures

use super::field::Field;
use serde::Serialize;

/// Why a single field failed its rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationErrorKind {
    #[error("required field is missing")]
    RequiredFieldMissing,
    #[error("value is not a valid {format}")]
    FormatInvalid { format: &'static str },
    #[error("value is longer than {max} characters")]
    LengthExceeded { max: usize },
    #[error("value is shorter than {min} characters")]
    LengthTooShort { min: usize },
    #[error("value does not match {other}")]
    FieldMismatch { other: Field },
    #[error("value is not one of the allowed options")]
    ValueNotInEnumeratedSet { allowed: &'static [&'static str] },
}

/// One field's failure plus the message shown beneath it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
