//! Synchronous field validation
//!
//! Validation is a pure function of the current form values: rules run in a
//! fixed order and short-circuit on the first failure. The `Display` text of
//! each error is the exact message shown to the user.

use super::form_state::{EnrollmentForm, LoginForm, RegistrationForm};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// Simple local@domain.tld shape, not an RFC 5322 parser.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

static MOBILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("MOBILE_REGEX: invalid regex pattern"));

const MIN_PASSWORD_LEN: usize = 8;

/// A failed validation rule; `Display` is the user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full Name is required.")]
    FullNameRequired,
    #[error("Date of Birth is required.")]
    DateOfBirthRequired,
    #[error("Gender is required.")]
    GenderRequired,
    #[error("Valid Email Address is required.")]
    EmailRequired,
    #[error("Valid 10-digit Mobile Number is required.")]
    MobileNumberInvalid,
    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("{0} is required.")]
    FieldRequired(String),
    #[error("Consent is required.")]
    ConsentRequired,
}

impl LoginForm {
    /// Validate the login form: non-empty email, then password length
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.as_text().is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if self.password.as_text().chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

impl RegistrationForm {
    /// Validate the registration form, rules in fixed order
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.as_text().trim().is_empty() {
            return Err(ValidationError::FullNameRequired);
        }
        if self.date_of_birth.as_text().is_empty() {
            return Err(ValidationError::DateOfBirthRequired);
        }
        if self.gender.as_text().is_empty() {
            return Err(ValidationError::GenderRequired);
        }
        if !EMAIL_REGEX.is_match(self.email.as_text()) {
            return Err(ValidationError::EmailRequired);
        }
        if !MOBILE_REGEX.is_match(self.mobile_number.as_text()) {
            return Err(ValidationError::MobileNumberInvalid);
        }
        if self.password.as_text().chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password.as_text() != self.confirm_password.as_text() {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

impl EnrollmentForm {
    /// Required-field enforcement only; no format checks.
    ///
    /// This mirrors native `required` attributes on a web form: the first
    /// empty field blocks submission with a per-field message, and consent
    /// must be checked. Field values are otherwise sent as typed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in [
            &self.name,
            &self.email,
            &self.phone,
            &self.course,
            &self.institution,
        ] {
            if field.as_text().is_empty() {
                return Err(ValidationError::FieldRequired(field.label.clone()));
            }
        }
        if !self.consent.is_checked() {
            return Err(ValidationError::ConsentRequired);
        }
        Ok(())
    }
}
