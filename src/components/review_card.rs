//! Review list entry linking to the detail and edit pages.

#[cfg(test)]
#[path = "review_card_test.rs"]
mod review_card_test;

use leptos::prelude::*;

use crate::net::types::BookData;

/// One review in the list: title, reviewer, a review excerpt, and links to
/// the detail page (always) and the edit page (own reviews only).
#[component]
pub fn ReviewCard(book: BookData) -> impl IntoView {
    let detail_href = format!("/detail/{}", book.id);
    let edit_href = format!("/edit/{}", book.id);
    let excerpt = excerpt(&book.review);
    let is_mine = book.is_mine;

    view! {
        <div class="review-card">
            <a class="review-card__title" href=detail_href>
                {book.title}
            </a>
            <p class="review-card__reviewer">{book.reviewer}</p>
            <p class="review-card__excerpt">{excerpt}</p>
            <Show when=move || is_mine>
                <a class="review-card__edit" href=edit_href.clone()>
                    "Edit"
                </a>
            </Show>
        </div>
    }
}

const EXCERPT_MAX_CHARS: usize = 120;

fn excerpt(review: &str) -> String {
    if review.chars().count() <= EXCERPT_MAX_CHARS {
        return review.to_owned();
    }
    let cut: String = review.chars().take(EXCERPT_MAX_CHARS).collect();
    format!("{cut}…")
}
