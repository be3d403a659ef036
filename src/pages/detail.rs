//! Review-detail page.
//!
//! Publicly reachable: the fetch waits for the session to settle so the
//! bearer header (and with it the ownership flag) is attached when a
//! session exists, but no login is required to read a review.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::BookData;
use crate::state::auth::AuthState;

#[component]
pub fn DetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let book_id = move || params.read().get("id");

    let book = RwSignal::new(None::<BookData>);
    let error = RwSignal::new(None::<String>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let state = auth.get();
        if state.loading {
            return;
        }
        let Some(id) = book_id() else {
            return;
        };
        requested.set(true);
        let token = state.token;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_book(&id, token.as_deref()).await {
                Ok(data) => book.set(Some(data)),
                Err(err) => error.set(Some(err)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, token);
    });

    view! {
        <div class="detail-page">
            <Show when=move || error.get().is_some()>
                <p class="detail-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                book.get()
                    .map(|data| {
                        let edit_href = format!("/edit/{}", data.id);
                        let url = data.url.clone();
                        let is_mine = data.is_mine;
                        view! {
                            <article class="detail-page__review">
                                <h1>{data.title}</h1>
                                <p class="detail-page__reviewer">
                                    "Reviewed by " {data.reviewer}
                                </p>
                                <a class="detail-page__url" href=url rel="noreferrer">
                                    {data.url}
                                </a>
                                <p class="detail-page__detail">{data.detail}</p>
                                <p class="detail-page__body">{data.review}</p>
                                <Show when=move || is_mine>
                                    <a class="btn" href=edit_href.clone()>
                                        "Edit"
                                    </a>
                                </Show>
                            </article>
                        }
                    })
            }}
            <p class="detail-page__back">
                <a href="/list">"Back to reviews"</a>
            </p>
        </div>
    }
}
