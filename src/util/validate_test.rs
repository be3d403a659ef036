use super::*;

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_shape_accepts_plain_address() {
    assert!(email_shape_ok("test@example.com"));
    assert!(email_shape_ok("a.b+c@mail.example.co.jp"));
}

#[test]
fn email_shape_rejects_missing_at_or_tld() {
    assert!(!email_shape_ok("example.com"));
    assert!(!email_shape_ok("test@example"));
    assert!(!email_shape_ok("test@.com"));
    assert!(!email_shape_ok("test@example."));
    assert!(!email_shape_ok("@example.com"));
}

#[test]
fn email_shape_rejects_whitespace_and_double_at() {
    assert!(!email_shape_ok("te st@example.com"));
    assert!(!email_shape_ok("test@exa mple.com"));
    assert!(!email_shape_ok("test@@example.com"));
    assert!(!email_shape_ok("a@b@example.com"));
}

// =============================================================
// Rule ordering: first violated rule wins
// =============================================================

#[test]
fn malformed_email_yields_pattern_error_not_required() {
    assert_eq!(validate_email("not-an-email"), Some(EMAIL_INVALID));
    assert_eq!(validate_email("x@y"), Some(EMAIL_INVALID));
}

#[test]
fn empty_email_yields_required_error() {
    assert_eq!(validate_email(""), Some(EMAIL_REQUIRED));
}

#[test]
fn valid_email_passes() {
    assert_eq!(validate_email("test@example.com"), None);
}

#[test]
fn password_required_then_length() {
    assert_eq!(validate_password(""), Some(PASSWORD_REQUIRED));
    assert_eq!(validate_password("12345"), Some(PASSWORD_TOO_SHORT));
    assert_eq!(validate_password("password123"), None);
}

#[test]
fn confirm_required_then_equality() {
    assert_eq!(validate_confirm("", "password123"), Some(CONFIRM_REQUIRED));
    assert_eq!(
        validate_confirm("password124", "password123"),
        Some(CONFIRM_MISMATCH)
    );
    assert_eq!(validate_confirm("password123", "password123"), None);
}

#[test]
fn confirm_mismatch_even_when_both_individually_valid() {
    // Both values pass the password length rule on their own.
    assert_eq!(validate_password("password123"), None);
    assert_eq!(validate_password("password124"), None);
    assert_eq!(
        validate_confirm("password124", "password123"),
        Some(CONFIRM_MISMATCH)
    );
}

#[test]
fn name_required_then_length() {
    assert_eq!(validate_name(""), Some(NAME_REQUIRED));
    assert_eq!(validate_name("a"), Some(NAME_TOO_SHORT));
    assert_eq!(validate_name("ab"), None);
}

#[test]
fn name_length_counts_characters_not_bytes() {
    assert_eq!(validate_name("山田"), None);
}

#[test]
fn required_rule_treats_whitespace_as_empty() {
    assert_eq!(validate_required("   ", "Title is required"), Some("Title is required"));
    assert_eq!(validate_required("T", "Title is required"), None);
}
