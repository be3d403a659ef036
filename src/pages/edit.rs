//! Review-edit page: prefill an owned review, save, return to its detail.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::BookCreateRequest;
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;

use super::post::{BookFormErrors, validate_book_form};

#[component]
pub fn EditPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let params = use_params_map();
    let book_id = move || params.read().get("id");

    let title = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let detail = RwSignal::new(String::new());
    let review = RwSignal::new(String::new());
    let errors = RwSignal::new(BookFormErrors::default());
    let load_error = RwSignal::new(None::<String>);
    let api_error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    // Prefill from the current review once the session settles.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let state = auth.get();
        if state.loading || !state.is_authenticated() {
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
                Ok(data) => {
                    title.set(data.title);
                    url.set(data.url);
                    detail.set(data.detail);
                    review.set(data.review);
                }
                Err(err) => load_error.set(Some(err)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, token);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = BookCreateRequest {
            title: title.get().trim().to_owned(),
            url: url.get().trim().to_owned(),
            detail: detail.get(),
            review: review.get(),
        };
        let checked = validate_book_form(&req.title, &req.url, &req.detail, &req.review);
        let ok = checked.is_valid();
        errors.set(checked);
        if !ok {
            return;
        }
        let Some(id) = book_id() else {
            return;
        };
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        api_error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_book(&id, &req, &token).await {
                Ok(()) => {
                    success.set(true);
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        super::SUCCESS_REDIRECT_MS,
                    ))
                    .await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&format!("/detail/{id}"));
                    }
                }
                Err(err) => {
                    api_error.set(Some(err));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, req, token);
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="form-page">
                        <p>
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="form-page">
                <h1>"Edit review"</h1>
                <Show when=move || load_error.get().is_some()>
                    <p class="form__error">{move || load_error.get().unwrap_or_default()}</p>
                </Show>
                <form class="form" on:submit=on_submit>
                    <label class="form-field">
                        "Title"
                        <input
                            class="form-field__input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        errors.get().title.map(|m| view! { <p class="form-field__error">{m}</p> })
                    }}

                    <label class="form-field">
                        "URL"
                        <input
                            class="form-field__input"
                            type="text"
                            prop:value=move || url.get()
                            on:input=move |ev| url.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        errors.get().url.map(|m| view! { <p class="form-field__error">{m}</p> })
                    }}

                    <label class="form-field">
                        "Detail"
                        <textarea
                            class="form-field__input form-field__input--multiline"
                            prop:value=move || detail.get()
                            on:input=move |ev| detail.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    {move || {
                        errors.get().detail.map(|m| view! { <p class="form-field__error">{m}</p> })
                    }}

                    <label class="form-field">
                        "Review"
                        <textarea
                            class="form-field__input form-field__input--multiline"
                            prop:value=move || review.get()
                            on:input=move |ev| review.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    {move || {
                        errors.get().review.map(|m| view! { <p class="form-field__error">{m}</p> })
                    }}

                    <button class="form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>

                    <Show when=move || api_error.get().is_some()>
                        <p class="form__error">{move || api_error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || success.get()>
                        <p class="form__success">"Review updated!"</p>
                    </Show>
                </form>
            </div>
        </Show>
    }
}
