//! Tagged validation rules evaluated against a plain value record

use super::error::{FieldError, ValidationErrorKind};
use super::field::{Field, FormValues};
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// Schemes accepted for the website link
const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// A single constraint bound to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    Url,
    MinLength(usize),
    MaxLength(usize),
    OneOf(&'static [&'static str]),
    /// Value must equal another field's value exactly
    Matches(Field),
}

impl Rule {
    /// Check `value` (the current value of `field`) against this rule.
    ///
    /// Everything except `Required` and `Matches` passes on an empty value,
    /// so optional fields only get checked once the user types something.
    pub fn check(&self, field: Field, value: &str, values: &FormValues) -> Result<(), FieldError> {
        if value.is_empty() && !matches!(self, Self::Required | Self::Matches(_)) {
            return Ok(());
        }

        let name = field.display_name();
        match *self {
            Self::Required if value.is_empty() => Err(FieldError::new(
                ValidationErrorKind::RequiredFieldMissing,
                format!("{name} is required"),
            )),
            Self::Required => Ok(()),
            Self::Email if !is_email(value) => Err(FieldError::new(
                ValidationErrorKind::FormatInvalid { format: "email" },
                "Must be a valid email",
            )),
            Self::Email => Ok(()),
            Self::Url if !is_absolute_url(value) => Err(FieldError::new(
                ValidationErrorKind::FormatInvalid { format: "url" },
                "Must be a valid URL",
            )),
            Self::Url => Ok(()),
            Self::MinLength(min) if char_len(value) < min => Err(FieldError::new(
                ValidationErrorKind::LengthTooShort { min },
                format!("{name} must be at least {min} characters"),
            )),
            Self::MinLength(_) => Ok(()),
            Self::MaxLength(max) if char_len(value) > max => Err(FieldError::new(
                ValidationErrorKind::LengthExceeded { max },
                format!("{name} must be at most {max} characters"),
            )),
            Self::MaxLength(_) => Ok(()),
            Self::OneOf(allowed) if !allowed.iter().any(|option| *option == value) => {
                Err(FieldError::new(
                    ValidationErrorKind::ValueNotInEnumeratedSet { allowed },
                    format!("{name} must be one of: {}", allowed.join(", ")),
                ))
            }
            Self::OneOf(_) => Ok(()),
            Self::Matches(other) if values.get(other) != value => Err(FieldError::new(
                ValidationErrorKind::FieldMismatch { other },
                "Passwords must match",
            )),
            Self::Matches(_) => Ok(()),
        }
    }
}

/// Length in characters, not bytes
fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Absolute http(s)/ftp URL whose host is an IP or a dotted domain
pub fn is_absolute_url(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Ok(parsed) = url::Url::parse(value) else {
        return false;
    };
    if !URL_SCHEMES.contains(&parsed.scheme()) {
        return false;
    }
    match parsed.host() {
        Some(url::Host::Domain(domain)) => domain
            .split('.')
            .filter(|label| !label.is_empty())
            .count()
            >= 2,
        Some(url::Host::Ipv4(_) | url::Host::Ipv6(_)) => true,
        None => false,
    }
}
