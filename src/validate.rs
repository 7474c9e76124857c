use regex::Regex;
use thiserror::Error;

use crate::dto::auth::{LoginForm, RegistrationForm};

/// A form submission rejected by the guard. The `Display` strings are the
/// exact user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Loose format check: anything shaped like `x@y.z` with no whitespace or
/// extra `@` passes. Intentionally not an RFC-grade validator.
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Strip everything that is not an ASCII digit, so formatted numbers like
/// `(555) 123-4567` compare as `5551234567`.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

pub fn is_valid_phone(phone: &str) -> bool {
    Regex::new(r"^[0-9]{10}$").is_ok_and(|re| re.is_match(&normalize_phone(phone)))
}

/// Login guard. First failing rule wins; field emptiness is checked on the
/// raw value, without trimming.
pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    if form.email.is_empty() || form.password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Registration guard. Rule order matters and short-circuits: missing fields,
/// then email format, phone format, password length, password confirmation.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    if form.fullname.is_empty()
        || form.email.is_empty()
        || form.phone.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
        || form.course.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone(&form.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    if form.password.chars().count() < 6 {
        return Err(ValidationError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}
