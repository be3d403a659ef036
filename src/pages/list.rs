//! Review-list page — the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests the review inventory once the session has settled authenticated
//! and renders it as cards; header carries the signed-in identity plus
//! logout and the entry points to posting and profile editing.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::review_card::ReviewCard;
use crate::net::types::BookData;
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;

#[component]
pub fn ListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let books = RwSignal::new(Vec::<BookData>::new());
    let books_loading = RwSignal::new(true);
    let books_error = RwSignal::new(None::<String>);

    // Fetch once per visit, as soon as the session settles authenticated.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let state = auth.get();
        if state.loading || !state.is_authenticated() {
            return;
        }
        let Some(token) = state.token else {
            return;
        };
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_books(&token).await {
                Ok(list) => books.set(list),
                Err(err) => books_error.set(Some(err)),
            }
            books_loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let user_name = move || {
        auth.get()
            .user
            .map_or_else(|| "—".to_owned(), |u| u.name)
    };

    let on_logout = move |_| {
        let state = crate::state::auth::logout(&crate::state::session::BrowserStorage);
        auth.set(state);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="list-page">
                        <p>
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="list-page">
                <header class="list-page__header">
                    <h1>"Book reviews"</h1>
                    <span class="list-page__spacer"></span>
                    <span class="list-page__self">"Welcome, " {user_name}</span>
                    <a class="btn" href="/post">
                        "Write a review"
                    </a>
                    <a class="btn" href="/user/edit">
                        "Edit profile"
                    </a>
                    <button class="btn list-page__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </header>

                <Show when=move || books_error.get().is_some()>
                    <p class="list-page__error">{move || books_error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !books_loading.get()
                    fallback=move || view! { <p>"Loading reviews..."</p> }
                >
                    <div class="list-page__cards">
                        {move || {
                            books
                                .get()
                                .into_iter()
                                .map(|book| view! { <ReviewCard book=book/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>
        </Show>
    }
}
