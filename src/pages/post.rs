//! Review-creation page.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::BookCreateRequest;
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;
use crate::util::validate::validate_required;

pub(crate) const TITLE_REQUIRED: &str = "Title is required";
pub(crate) const URL_REQUIRED: &str = "URL is required";
pub(crate) const DETAIL_REQUIRED: &str = "Detail is required";
pub(crate) const REVIEW_REQUIRED: &str = "Review is required";

/// Per-field messages for the create/edit review forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct BookFormErrors {
    pub title: Option<&'static str>,
    pub url: Option<&'static str>,
    pub detail: Option<&'static str>,
    pub review: Option<&'static str>,
}

impl BookFormErrors {
    pub(crate) fn is_valid(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.detail.is_none() && self.review.is_none()
    }
}

pub(crate) fn validate_book_form(
    title: &str,
    url: &str,
    detail: &str,
    review: &str,
) -> BookFormErrors {
    BookFormErrors {
        title: validate_required(title, TITLE_REQUIRED),
        url: validate_required(url, URL_REQUIRED),
        detail: validate_required(detail, DETAIL_REQUIRED),
        review: validate_required(review, REVIEW_REQUIRED),
    }
}

#[component]
pub fn PostPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let title = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let detail = RwSignal::new(String::new());
    let review = RwSignal::new(String::new());
    let errors = RwSignal::new(BookFormErrors::default());
    let api_error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

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
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        api_error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_book(&req, &token).await {
                Ok(()) => {
                    success.set(true);
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        super::SUCCESS_REDIRECT_MS,
                    ))
                    .await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/list");
                    }
                }
                Err(err) => {
                    api_error.set(Some(err));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (req, token);
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
                <h1>"Write a review"</h1>
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
                            placeholder="https://example.com/book"
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
                        {move || if busy.get() { "Publishing..." } else { "Publish" }}
                    </button>

                    <Show when=move || api_error.get().is_some()>
                        <p class="form__error">{move || api_error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || success.get()>
                        <p class="form__success">"Review published!"</p>
                    </Show>
                </form>
            </div>
        </Show>
    }
}
