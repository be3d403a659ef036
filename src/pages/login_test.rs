use super::*;
use crate::util::validate::{
    EMAIL_INVALID, EMAIL_REQUIRED, PASSWORD_REQUIRED, PASSWORD_TOO_SHORT,
};

#[test]
fn empty_form_shows_one_error_per_required_field() {
    let errors = validate_login_form("", "");
    assert_eq!(errors.email, Some(EMAIL_REQUIRED));
    assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
    assert!(!errors.is_valid());
}

#[test]
fn malformed_email_reports_pattern_error_alongside_password_error() {
    let errors = validate_login_form("not-an-email", "12345");
    assert_eq!(errors.email, Some(EMAIL_INVALID));
    assert_eq!(errors.password, Some(PASSWORD_TOO_SHORT));
}

#[test]
fn valid_credentials_pass() {
    let errors = validate_login_form("test@example.com", "password123");
    assert_eq!(errors, LoginErrors::default());
    assert!(errors.is_valid());
}
