//! Registration rule table and the validation entry points

use super::error::FieldError;
use super::field::{Field, FormValues, RevenueBucket};
use super::result::ValidationResult;
use super::rules::Rule;

/// Longest accepted value for the short text fields
pub const MAX_TEXT_LEN: usize = 255;
/// Longest accepted store description
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Rules bound to one field, checked in order
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub field: Field,
    pub rules: &'static [Rule],
}

static REGISTRATION_SCHEMA: [FieldSchema; 8] = [
    FieldSchema {
        field: Field::Email,
        rules: &[Rule::Required, Rule::Email, Rule::MaxLength(MAX_TEXT_LEN)],
    },
    FieldSchema {
        field: Field::CompanyName,
        rules: &[Rule::Required, Rule::MaxLength(MAX_TEXT_LEN)],
    },
    FieldSchema {
        field: Field::Website,
        rules: &[Rule::Url],
    },
    FieldSchema {
        field: Field::Revenue,
        rules: &[Rule::Required, Rule::OneOf(&RevenueBucket::LABELS)],
    },
    FieldSchema {
        field: Field::StoreName,
        rules: &[Rule::Required, Rule::MaxLength(MAX_TEXT_LEN)],
    },
    FieldSchema {
        field: Field::Description,
        rules: &[Rule::Required, Rule::MaxLength(MAX_DESCRIPTION_LEN)],
    },
    FieldSchema {
        field: Field::Password,
        rules: &[Rule::Required, Rule::MinLength(MIN_PASSWORD_LEN)],
    },
    FieldSchema {
        field: Field::ConfirmPassword,
        // Mismatch is reported before required once a password is set
        rules: &[Rule::Matches(Field::Password), Rule::Required],
    },
];

pub fn registration_schema() -> &'static [FieldSchema] {
    &REGISTRATION_SCHEMA
}

/// Validate the whole form
pub fn validate(values: &FormValues) -> ValidationResult {
    let mut result = ValidationResult::new();
    for schema in registration_schema() {
        if let Some(error) = check_schema(schema, values) {
            result.insert(schema.field, error);
        }
    }
    tracing::debug!(errors = result.len(), "validated registration form");
    result
}

/// Validate a single field against the current snapshot
pub fn validate_field(values: &FormValues, field: Field) -> Option<FieldError> {
    registration_schema()
        .iter()
        .find(|schema| schema.field == field)
        .and_then(|schema| check_schema(schema, values))
}

/// The first failing rule wins
fn check_schema(schema: &FieldSchema, values: &FormValues) -> Option<FieldError> {
    let value = values.get(schema.field);
    schema
        .rules
        .iter()
        .find_map(|rule| rule.check(schema.field, value, values).err())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::error::ValidationErrorKind;
    use pretty_assertions::assert_eq;

    fn demo_values() -> FormValues {
        FormValues {
            email: "demo@company.com".to_string(),
            company_name: "Demo Inc.".to_string(),
            website: String::new(),
            revenue: "10000-100000".to_string(),
            store_name: "My Store".to_string(),
            description: "A shop.".to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc123".to_string(),
        }
    }

    mod schema_table {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_every_input_has_rules() {
            for field in Field::INPUTS {
                assert!(
                    registration_schema().iter().any(|s| s.field == field),
                    "{field} has no schema"
                );
            }
        }

        #[test]
        fn test_submit_slot_has_no_rules() {
            assert!(registration_schema().iter().all(|s| s.field != Field::Submit));
        }

        #[test]
        fn test_website_is_optional() {
            let website = registration_schema()
                .iter()
                .find(|s| s.field == Field::Website)
                .unwrap();
            assert!(!website.rules.contains(&Rule::Required));
        }
    }

    mod whole_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_demo_input_is_valid() {
            let result = validate(&demo_values());
            assert!(result.is_valid(), "unexpected errors: {result:?}");
        }

        #[test]
        fn test_empty_form_reports_every_required_field() {
            let result = validate(&FormValues::default());
            let failed: Vec<Field> = result.iter().map(|(f, _)| f).collect();
            assert_eq!(
                failed,
                vec![
                    Field::Email,
                    Field::CompanyName,
                    Field::Revenue,
                    Field::StoreName,
                    Field::Description,
                    Field::Password,
                    Field::ConfirmPassword,
                ]
            );
            for (_, error) in result.iter() {
                assert_eq!(error.kind, ValidationErrorKind::RequiredFieldMissing);
                assert!(!error.message.is_empty());
            }
        }

        #[test]
        fn test_password_mismatch_only_flags_confirm() {
            let values = FormValues {
                confirm_password: "xyz456".to_string(),
                ..demo_values()
            };
            let result = validate(&values);
            assert_eq!(result.len(), 1);
            assert_eq!(
                result.message(Field::ConfirmPassword),
                Some("Passwords must match")
            );
        }

        #[test]
        fn test_empty_confirm_with_password_is_mismatch() {
            let values = FormValues {
                password: "abc123".to_string(),
                confirm_password: String::new(),
                ..demo_values()
            };
            let result = validate(&values);
            assert_eq!(
                result.message(Field::ConfirmPassword),
                Some("Passwords must match")
            );
        }

        #[test]
        fn test_both_passwords_empty_reports_required() {
            let values = FormValues {
                password: String::new(),
                confirm_password: String::new(),
                ..demo_values()
            };
            let result = validate(&values);
            assert_eq!(
                result.message(Field::ConfirmPassword),
                Some("Confirm Password is required")
            );
        }

        #[test]
        fn test_invalid_website_is_format_error() {
            let values = FormValues {
                website: "not-a-url".to_string(),
                ..demo_values()
            };
            let result = validate(&values);
            assert_eq!(result.len(), 1);
            let error = result.get(Field::Website).unwrap();
            assert_eq!(error.kind, ValidationErrorKind::FormatInvalid { format: "url" });
            assert_eq!(error.message, "Must be a valid URL");
        }

        #[test]
        fn test_valid_website_passes() {
            let values = FormValues {
                website: "https://my-store.example.com".to_string(),
                ..demo_values()
            };
            assert!(validate(&values).is_valid());
        }

        #[test]
        fn test_unknown_revenue_bucket() {
            let values = FormValues {
                revenue: "lots".to_string(),
                ..demo_values()
            };
            let error = validate(&values).get(Field::Revenue).cloned().unwrap();
            assert!(matches!(
                error.kind,
                ValidationErrorKind::ValueNotInEnumeratedSet { .. }
            ));
        }

        #[test]
        fn test_description_limit_is_500() {
            let mut values = demo_values();
            values.description = "d".repeat(MAX_DESCRIPTION_LEN);
            assert!(validate(&values).is_valid());
            values.description.push('d');
            let error = validate(&values).get(Field::Description).cloned().unwrap();
            assert_eq!(error.kind, ValidationErrorKind::LengthExceeded { max: 500 });
        }

        #[test]
        fn test_long_email_is_length_error() {
            let local = "a".repeat(250);
            let values = FormValues {
                email: format!("{local}@example.com"),
                ..demo_values()
            };
            let error = validate(&values).get(Field::Email).cloned().unwrap();
            assert_eq!(error.kind, ValidationErrorKind::LengthExceeded { max: 255 });
        }

        #[test]
        fn test_short_password_with_matching_confirm() {
            let values = FormValues {
                password: "abc".to_string(),
                confirm_password: "abc".to_string(),
                ..demo_values()
            };
            let result = validate(&values);
            assert_eq!(
                result.message(Field::Password),
                Some("Password must be at least 6 characters")
            );
            assert!(!result.contains(Field::ConfirmPassword));
        }

        #[test]
        fn test_empty_field_reports_required_before_format() {
            let values = FormValues {
                email: String::new(),
                ..demo_values()
            };
            assert_eq!(
                validate(&values).message(Field::Email),
                Some("Email is required")
            );
        }
    }

    mod single_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_matches_whole_form_result() {
            let values = FormValues {
                email: "bad".to_string(),
                website: "nope".to_string(),
                ..FormValues::default()
            };
            let whole = validate(&values);
            for field in Field::INPUTS {
                assert_eq!(validate_field(&values, field).as_ref(), whole.get(field));
            }
        }

        #[test]
        fn test_submit_slot_never_fails() {
            assert!(validate_field(&FormValues::default(), Field::Submit).is_none());
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn equal_confirm_never_flags_confirm(password in "\\PC{1,40}") {
                let values = FormValues {
                    confirm_password: password.clone(),
                    password,
                    ..demo_values()
                };
                prop_assert!(!validate(&values).contains(Field::ConfirmPassword));
            }

            #[test]
            fn different_confirm_is_mismatch(
                password in "\\PC{1,40}",
                confirm in "\\PC{0,40}"
            ) {
                prop_assume!(password != confirm);
                let values = FormValues {
                    password,
                    confirm_password: confirm,
                    ..demo_values()
                };
                let result = validate(&values);
                let kind = result.get(Field::ConfirmPassword).map(|e| e.kind.clone());
                prop_assert_eq!(
                    kind,
                    Some(ValidationErrorKind::FieldMismatch { other: Field::Password })
                );
            }

            #[test]
            fn well_formed_values_are_valid(
                company in "[A-Za-z][A-Za-z0-9 .]{0,40}",
                store in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                description in "[A-Za-z][A-Za-z0-9 .,]{0,200}",
                password in "[A-Za-z0-9!@#]{6,30}",
                revenue in prop::sample::select(RevenueBucket::LABELS.to_vec()),
                user in "[a-z]{1,20}"
            ) {
                let values = FormValues {
                    email: format!("{user}@example.com"),
                    company_name: company,
                    website: format!("https://{user}.example.com"),
                    revenue: revenue.to_string(),
                    store_name: store,
                    description,
                    confirm_password: password.clone(),
                    password,
                };
                let result = validate(&values);
                prop_assert!(result.is_valid(), "unexpected errors: {:?}", result);
            }
        }
    }
}
