use super::*;

#[test]
fn book_endpoint_formats_expected_path() {
    assert_eq!(book_endpoint("b123"), "/books/b123");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("t1"), "Bearer t1");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(503), "request failed: 503");
}
