//! Login page: credential form, session replacement, delayed redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::validate::{validate_email, validate_password};

/// Per-field messages from one submit-time validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub(crate) fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate every field before any remote call so all failing fields show
/// their message at once.
pub(crate) fn validate_login_form(email: &str, password: &str) -> LoginErrors {
    LoginErrors {
        email: validate_email(email),
        password: validate_password(password),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
    let api_error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let checked = validate_login_form(&email_value, &password_value);
        let ok = checked.is_valid();
        errors.set(checked);
        if !ok {
            return;
        }
        api_error.set(None);
        busy.set(true);

        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::state::auth::login(&email_value, &password_value).await {
                Ok(state) => {
                    auth.set(state);
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
    };

    view! {
        <div class="form-page">
            <h1>"Log in"</h1>
            <form class="form" on:submit=on_submit>
                <label class="form-field">
                    "Email"
                    <input
                        class="form-field__input"
                        type="email"
                        placeholder="example@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    errors.get().email.map(|m| view! { <p class="form-field__error">{m}</p> })
                }}

                <label class="form-field">
                    "Password"
                    <input
                        class="form-field__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    errors.get().password.map(|m| view! { <p class="form-field__error">{m}</p> })
                }}

                <button class="form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Log in" }}
                </button>

                <Show when=move || api_error.get().is_some()>
                    <p class="form__error">{move || api_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || success.get()>
                    <p class="form__success">"Logged in!"</p>
                </Show>
            </form>
            <p class="form-page__alt">
                "New here? " <a href="/signup">"Create an account"</a>
            </p>
        </div>
    }
}
