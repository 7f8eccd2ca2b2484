//! Contact form validation and its simulated submission

pub mod submit;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub use self::submit::{
    ContactSubmission, FormMessage, SubmitOutcome, SubmitState, SubmitTimings,
};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl Field {
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            required,
            value: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("this field is required")]
    Missing,
    #[error("enter a valid email address")]
    InvalidEmail,
}

/// Styling state a host applies to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    /// Not validated yet (untouched input).
    #[default]
    Pristine,
    Valid,
    Invalid(FieldError),
}

impl From<Result<(), FieldError>> for FieldState {
    fn from(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => FieldState::Valid,
            Err(err) => FieldState::Invalid(err),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate one field against its trimmed value.
pub fn validate_field(field: &Field) -> Result<(), FieldError> {
    let value = field.value.trim();
    if field.required && value.is_empty() {
        return Err(FieldError::Missing);
    }
    if field.kind == FieldKind::Email
        && !value.is_empty()
        && !is_valid_email(value)
    {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Clear every value, as a form reset does after a completed submission.
pub fn reset_fields(fields: &mut [Field]) {
    for field in fields {
        field.value.clear();
    }
}

/// Every invalid field of a rejected form, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) need attention", .invalid.len())]
pub struct FormErrors {
    pub invalid: Vec<(String, FieldError)>,
}

/// Validate every required field, without stopping at the first failure,
/// so each invalid input can be marked at once. Optional fields only get
/// the per-input check of [`validate_field`] and never block submission.
pub fn validate_form(fields: &[Field]) -> Result<(), FormErrors> {
    let invalid: Vec<_> = fields
        .iter()
        .filter(|field| field.required)
        .filter_map(|field| {
            validate_field(field)
                .err()
                .map(|err| (field.name.clone(), err))
        })
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        tracing::debug!("form rejected: {} invalid field(s)", invalid.len());
        Err(FormErrors { invalid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_form(name: &str, email: &str, message: &str) -> Vec<Field> {
        vec![
            Field::new("name", FieldKind::Text, true).with_value(name),
            Field::new("email", FieldKind::Email, true).with_value(email),
            Field::new("subject", FieldKind::Text, false),
            Field::new("message", FieldKind::TextArea, true)
                .with_value(message),
        ]
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("ada@example.org"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada example@x.io"));
        assert!(!is_valid_email("@x.io"));
    }

    #[test]
    fn whitespace_only_required_field_is_missing() {
        let field = Field::new("name", FieldKind::Text, true).with_value("   ");
        assert_eq!(validate_field(&field), Err(FieldError::Missing));
    }

    #[test]
    fn optional_email_may_be_empty_but_not_malformed() {
        let empty = Field::new("cc", FieldKind::Email, false);
        assert_eq!(validate_field(&empty), Ok(()));
        let bad = empty.with_value("nope");
        assert_eq!(validate_field(&bad), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn form_reports_every_invalid_field_in_order() {
        let err = validate_form(&contact_form("", "not-an-email", ""))
            .expect_err("invalid");
        assert_eq!(
            err.invalid,
            vec![
                ("name".to_string(), FieldError::Missing),
                ("email".to_string(), FieldError::InvalidEmail),
                ("message".to_string(), FieldError::Missing),
            ]
        );
        assert_eq!(err.to_string(), "3 field(s) need attention");
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(
            validate_form(&contact_form("Ada", " ada@example.org ", "Hello")),
            Ok(())
        );
    }

    #[test]
    fn malformed_optional_email_does_not_block_the_form() {
        let fields = vec![
            Field::new("name", FieldKind::Text, true).with_value("Ada"),
            Field::new("cc", FieldKind::Email, false).with_value("nope"),
        ];
        assert_eq!(validate_form(&fields), Ok(()));
        assert_eq!(validate_field(&fields[1]), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn field_state_from_result() {
        assert_eq!(FieldState::from(Ok(())), FieldState::Valid);
        assert_eq!(
            FieldState::from(Err(FieldError::Missing)),
            FieldState::Invalid(FieldError::Missing)
        );
        assert_eq!(FieldState::default(), FieldState::Pristine);
    }
}
