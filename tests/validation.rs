use training_portal_api::{
    dto::auth::{LoginForm, RegistrationForm},
    validate::{
        ValidationError, is_valid_email, normalize_phone, validate_login, validate_registration,
    },
};

fn registration() -> RegistrationForm {
    RegistrationForm {
        fullname: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "(555) 123-4567".to_string(),
        password: "abcdef".to_string(),
        confirm_password: "abcdef".to_string(),
        course: "Web Development".to_string(),
    }
}

#[test]
fn well_formed_login_passes() {
    let form = LoginForm {
        email: "a@b.com".to_string(),
        password: "secret".to_string(),
    };
    assert!(validate_login(&form).is_ok());
}

#[test]
fn empty_login_fields_are_rejected_first() {
    let form = LoginForm {
        email: String::new(),
        password: "secret".to_string(),
    };
    let err = validate_login(&form).unwrap_err();
    assert_eq!(err, ValidationError::MissingFields);
    assert_eq!(err.to_string(), "Please fill in all fields");

    // An empty password is rejected with the same message.
    let form = LoginForm {
        email: "a@b.com".to_string(),
        password: String::new(),
    };
    assert_eq!(
        validate_login(&form).unwrap_err(),
        ValidationError::MissingFields
    );
}

#[test]
fn login_email_without_dot_segment_fails() {
    let form = LoginForm {
        email: "a@b".to_string(),
        password: "secret".to_string(),
    };
    let err = validate_login(&form).unwrap_err();
    assert_eq!(err, ValidationError::InvalidEmail);
    assert_eq!(err.to_string(), "Please enter a valid email address");
}

#[test]
fn email_pattern_stays_loose() {
    assert!(is_valid_email("a@b.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@@b.com"));
}

#[test]
fn formatted_phone_normalizes_to_ten_digits() {
    assert_eq!(normalize_phone("(555) 123-4567"), "5551234567");

    let form = registration();
    assert!(validate_registration(&form).is_ok());
}

#[test]
fn short_or_long_phone_is_rejected() {
    let mut form = registration();
    form.phone = "12345".to_string();
    let err = validate_registration(&form).unwrap_err();
    assert_eq!(err, ValidationError::InvalidPhone);
    assert_eq!(err.to_string(), "Please enter a valid 10-digit phone number");

    form.phone = "555 123 4567 89".to_string();
    assert_eq!(
        validate_registration(&form).unwrap_err(),
        ValidationError::InvalidPhone
    );
}

#[test]
fn short_password_fails_even_when_confirmed() {
    let mut form = registration();
    form.password = "abc12".to_string();
    form.confirm_password = "abc12".to_string();
    let err = validate_registration(&form).unwrap_err();
    assert_eq!(err, ValidationError::PasswordTooShort);
    assert_eq!(
        err.to_string(),
        "Password must be at least 6 characters long"
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let mut form = registration();
    form.password = "abcdef".to_string();
    form.confirm_password = "abcdefg".to_string();
    let err = validate_registration(&form).unwrap_err();
    assert_eq!(err, ValidationError::PasswordMismatch);
    assert_eq!(err.to_string(), "Passwords do not match");
}

#[test]
fn rules_short_circuit_in_declared_order() {
    // Missing field wins over a malformed email.
    let mut form = registration();
    form.fullname = String::new();
    form.email = "not-an-email".to_string();
    assert_eq!(
        validate_registration(&form).unwrap_err(),
        ValidationError::MissingFields
    );

    // Malformed email wins over a bad phone.
    let mut form = registration();
    form.email = "not-an-email".to_string();
    form.phone = "12".to_string();
    assert_eq!(
        validate_registration(&form).unwrap_err(),
        ValidationError::InvalidEmail
    );

    // Bad phone wins over a short password.
    let mut form = registration();
    form.phone = "12".to_string();
    form.password = "abc".to_string();
    form.confirm_password = "abc".to_string();
    assert_eq!(
        validate_registration(&form).unwrap_err(),
        ValidationError::InvalidPhone
    );
}

#[test]
fn emptiness_is_checked_on_the_raw_value() {
    // Whitespace-only input is not empty; it falls through to the email rule.
    let form = LoginForm {
        email: " ".to_string(),
        password: "secret".to_string(),
    };
    assert_eq!(
        validate_login(&form).unwrap_err(),
        ValidationError::InvalidEmail
    );
}
