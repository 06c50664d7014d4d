//! Validation utilities.

use crate::{CadastroError, FieldError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `CadastroError` on failure.
    fn validate_request(&self) -> Result<(), CadastroError> {
        self.validate().map_err(validation_errors_to_cadastro_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors, ordered by field name.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect()
}

/// Converts `validator::ValidationErrors` to `CadastroError`.
///
/// The resulting message is the rule messages joined with `"; "`, so a
/// single failed rule yields its message unchanged.
#[must_use]
pub fn validation_errors_to_cadastro_error(errors: ValidationErrors) -> CadastroError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    CadastroError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use crate::User;
    use std::borrow::Cow;
    use validator::ValidationError;

    /// Message returned when a user is younger than the minimum age.
    pub const UNDERAGE_MESSAGE: &str = "O usuário deve ser maior de idade.";

    /// Message returned when a user name is blank.
    pub const BLANK_NAME_MESSAGE: &str = "O nome do usuário é obrigatório.";

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that an age is at least [`User::MINIMUM_AGE`].
    pub fn adult_age(age: impl std::borrow::Borrow<u32>) -> Result<(), ValidationError> {
        if *age.borrow() < User::MINIMUM_AGE {
            return Err(
                ValidationError::new("adult_age").with_message(Cow::Borrowed(UNDERAGE_MESSAGE))
            );
        }
        Ok(())
    }

    /// Validates a user name.
    pub fn valid_name(name: &str) -> Result<(), ValidationError> {
        not_blank(name).map_err(|e| e.with_message(Cow::Borrowed(BLANK_NAME_MESSAGE)))
    }
}
