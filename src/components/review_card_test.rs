use super::*;

#[test]
fn short_reviews_pass_through() {
    assert_eq!(excerpt("great book"), "great book");
}

#[test]
fn long_reviews_are_cut_at_character_boundary() {
    let long = "あ".repeat(200);
    let cut = excerpt(&long);
    assert_eq!(cut.chars().count(), 121);
    assert!(cut.ends_with('…'));
}
