//! Field validation rules shared by the login, signup, and edit forms.
//!
//! Rules for a field evaluate in declaration order (required, then shape or
//! cross-field equality, then length); the first violated rule supplies the
//! field's single visible message. All fields are checked before any remote
//! call so every failing field shows its message at once.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const CONFIRM_REQUIRED: &str = "Password confirmation is required";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match";
pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";

const PASSWORD_MIN_CHARS: usize = 6;
const NAME_MIN_CHARS: usize = 2;

/// `local@domain.tld` shape: no whitespace, exactly one `@` with a non-empty
/// local part, and a domain carrying a dot with non-empty halves.
pub fn email_shape_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(EMAIL_REQUIRED);
    }
    if !email_shape_ok(value) {
        return Some(EMAIL_INVALID);
    }
    None
}

pub fn validate_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(PASSWORD_REQUIRED);
    }
    if value.chars().count() < PASSWORD_MIN_CHARS {
        return Some(PASSWORD_TOO_SHORT);
    }
    None
}

pub fn validate_confirm(value: &str, password: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(CONFIRM_REQUIRED);
    }
    if value != password {
        return Some(CONFIRM_MISMATCH);
    }
    None
}

pub fn validate_name(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(NAME_REQUIRED);
    }
    if value.chars().count() < NAME_MIN_CHARS {
        return Some(NAME_TOO_SHORT);
    }
    None
}

/// Required-only rule for the free-text review fields.
pub fn validate_required(value: &str, message: &'static str) -> Option<&'static str> {
    if value.trim().is_empty() { Some(message) } else { None }
}
