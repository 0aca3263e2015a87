//! Registration form validation
//!
//! Declarative per-field rules evaluated against a plain [`FormValues`]
//! record. The result maps each failing field to a display message; the
//! form may be submitted only when that mapping is empty.

mod error;
mod field;
mod result;
mod rules;
mod schema;

pub use field::{Field, FormValues, RevenueBucket, UnknownRevenueBucket};
pub use result::ValidationResult;
pub use schema::{validate, validate_field};
