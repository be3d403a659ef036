use super::*;

#[test]
fn empty_form_shows_every_required_error_at_once() {
    let errors = validate_book_form("", "", "", "");
    assert_eq!(errors.title, Some(TITLE_REQUIRED));
    assert_eq!(errors.url, Some(URL_REQUIRED));
    assert_eq!(errors.detail, Some(DETAIL_REQUIRED));
    assert_eq!(errors.review, Some(REVIEW_REQUIRED));
}

#[test]
fn whitespace_only_fields_count_as_empty() {
    let errors = validate_book_form("  ", "https://example.com", "D", "R");
    assert_eq!(errors.title, Some(TITLE_REQUIRED));
    assert_eq!(errors.url, None);
}

#[test]
fn filled_form_passes() {
    let errors = validate_book_form("T", "https://example.com", "D", "R");
    assert!(errors.is_valid());
}
