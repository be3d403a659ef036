use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::util::validate::{
    CONFIRM_MISMATCH, CONFIRM_REQUIRED, EMAIL_INVALID, EMAIL_REQUIRED, NAME_REQUIRED,
    PASSWORD_REQUIRED,
};

fn valid_request() -> UserCreateRequest {
    UserCreateRequest {
        name: "testuser".to_owned(),
        email: "test@example.com".to_owned(),
        password: "password123".to_owned(),
    }
}

fn icon_response() -> IconUploadResponse {
    IconUploadResponse {
        icon_url: "https://example.com/icon.png".to_owned(),
    }
}

// =============================================================
// Form validation
// =============================================================

#[test]
fn empty_form_shows_every_required_error_at_once() {
    let errors = validate_signup_form("", "", "", "");
    assert_eq!(errors.email, Some(EMAIL_REQUIRED));
    assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
    assert_eq!(errors.confirm, Some(CONFIRM_REQUIRED));
    assert_eq!(errors.name, Some(NAME_REQUIRED));
}

#[test]
fn malformed_email_never_reports_required() {
    let errors = validate_signup_form("bad email@", "password123", "password123", "testuser");
    assert_eq!(errors.email, Some(EMAIL_INVALID));
}

#[test]
fn confirm_mismatch_detected_when_other_fields_valid() {
    let errors =
        validate_signup_form("test@example.com", "password123", "password124", "testuser");
    assert_eq!(errors.confirm, Some(CONFIRM_MISMATCH));
    assert_eq!(errors.password, None);
}

#[test]
fn fully_valid_form_passes() {
    let errors =
        validate_signup_form("test@example.com", "password123", "password123", "testuser");
    assert!(errors.is_valid());
}

// =============================================================
// Submission sequencing
// =============================================================

#[test]
fn signup_without_avatar_makes_only_the_create_call() {
    let uploads = Rc::new(Cell::new(0_u32));
    let uploads_probe = uploads.clone();
    let result = block_on(signup_with(
        valid_request(),
        None::<&str>,
        |_req| async { Ok(UserCreateResponse { token: "t1".to_owned() }) },
        move |_icon, _token| {
            uploads_probe.set(uploads_probe.get() + 1);
            async { Ok(icon_response()) }
        },
    ));
    assert!(result.is_ok());
    assert_eq!(uploads.get(), 0);
}

#[test]
fn signup_with_avatar_uploads_with_the_returned_token() {
    let seen_token = Rc::new(Cell::new(false));
    let seen_probe = seen_token.clone();
    let result = block_on(signup_with(
        valid_request(),
        Some("avatar-bytes"),
        |_req| async { Ok(UserCreateResponse { token: "t1".to_owned() }) },
        move |icon, token| {
            assert_eq!(icon, "avatar-bytes");
            assert_eq!(token, "t1");
            seen_probe.set(true);
            async { Ok(icon_response()) }
        },
    ));
    assert!(result.is_ok());
    assert!(seen_token.get());
}

#[test]
fn icon_upload_failure_does_not_fail_the_signup() {
    let result = block_on(signup_with(
        valid_request(),
        Some("avatar-bytes"),
        |_req| async { Ok(UserCreateResponse { token: "t1".to_owned() }) },
        |_icon, _token| async { Err("upload rejected".to_owned()) },
    ));
    assert!(result.is_ok());
}

#[test]
fn create_failure_propagates_and_skips_the_upload() {
    let uploads = Rc::new(Cell::new(0_u32));
    let uploads_probe = uploads.clone();
    let result = block_on(signup_with(
        valid_request(),
        Some("avatar-bytes"),
        |_req| async { Err("email already taken".to_owned()) },
        move |_icon, _token| {
            uploads_probe.set(uploads_probe.get() + 1);
            async { Ok(icon_response()) }
        },
    ));
    assert_eq!(result.unwrap_err(), "email already taken");
    assert_eq!(uploads.get(), 0);
}
