//! Signup page: account form with optional avatar, two-call submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submission sequences the account-creation call to completion before the
//! icon upload is attempted with the returned token. Icon-upload failure is
//! deliberately non-fatal: the account already exists, so it is logged as a
//! warning and the signup still succeeds.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

#[cfg(any(test, feature = "hydrate"))]
use std::future::Future;

use leptos::prelude::*;

use crate::components::avatar_field::AvatarField;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{IconUploadResponse, UserCreateRequest, UserCreateResponse};
use crate::util::upload::UploadPayload;
use crate::util::validate::{
    validate_confirm, validate_email, validate_name, validate_password,
};

/// Per-field messages from one submit-time validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SignupErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm: Option<&'static str>,
    pub name: Option<&'static str>,
}

impl SignupErrors {
    pub(crate) fn is_valid(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.confirm.is_none()
            && self.name.is_none()
    }
}

pub(crate) fn validate_signup_form(
    email: &str,
    password: &str,
    confirm: &str,
    name: &str,
) -> SignupErrors {
    SignupErrors {
        email: validate_email(email),
        password: validate_password(password),
        confirm: validate_confirm(confirm, password),
        name: validate_name(name),
    }
}

/// Create the account, then upload the avatar (when one was prepared) with
/// the token the creation call returned. The upload failing does not fail
/// the signup.
///
/// # Errors
///
/// Returns the account-creation call's display string; the icon upload
/// never contributes an error.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn signup_with<C, CFut, U, UFut, I>(
    req: UserCreateRequest,
    icon: Option<I>,
    create: C,
    upload: U,
) -> Result<(), String>
where
    C: FnOnce(UserCreateRequest) -> CFut,
    CFut: Future<Output = Result<UserCreateResponse, String>>,
    U: FnOnce(I, String) -> UFut,
    UFut: Future<Output = Result<IconUploadResponse, String>>,
{
    let created = create(req).await?;
    if let Some(icon) = icon {
        if let Err(err) = upload(icon, created.token).await {
            log::warn!("icon upload failed after signup: {err}");
        }
    }
    Ok(())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let errors = RwSignal::new(SignupErrors::default());
    let api_error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    // Upload-candidate state owned by this form; reset on each selection.
    let file_error = RwSignal::new(None::<String>);
    let preview = RwSignal::new(None::<String>);
    let payload = RwSignal::new_local(None::<UploadPayload>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let confirm_value = confirm.get();
        let name_value = name.get().trim().to_owned();
        let checked =
            validate_signup_form(&email_value, &password_value, &confirm_value, &name_value);
        let ok = checked.is_valid();
        errors.set(checked);
        if !ok {
            return;
        }
        api_error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let req = UserCreateRequest {
                name: name_value,
                email: email_value,
                password: password_value,
            };
            let icon = payload.get_untracked();
            let result = signup_with(
                req,
                icon,
                |req| async move { crate::net::api::create_user(&req).await },
                |file: UploadPayload, token: String| async move {
                    crate::net::api::upload_icon(&file, &token).await
                },
            )
            .await;
            match result {
                Ok(()) => {
                    success.set(true);
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        super::SUCCESS_REDIRECT_MS,
                    ))
                    .await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
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
            <h1>"Sign up"</h1>
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

                <label class="form-field">
                    "Confirm password"
                    <input
                        class="form-field__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    errors.get().confirm.map(|m| view! { <p class="form-field__error">{m}</p> })
                }}

                <label class="form-field">
                    "Name"
                    <input
                        class="form-field__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    errors.get().name.map(|m| view! { <p class="form-field__error">{m}</p> })
                }}

                <AvatarField error=file_error preview=preview payload=payload/>

                <button class="form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing up..." } else { "Sign up" }}
                </button>

                <Show when=move || api_error.get().is_some()>
                    <p class="form__error">{move || api_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || success.get()>
                    <p class="form__success">"Account created!"</p>
                </Show>
            </form>
            <p class="form-page__alt">
                "Already have an account? " <a href="/login">"Log in"</a>
            </p>
        </div>
    }
}
