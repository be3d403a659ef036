//! Profile-edit page: rename the account and optionally replace the avatar.

#[cfg(test)]
#[path = "profile_edit_test.rs"]
mod profile_edit_test;

#[cfg(any(test, feature = "hydrate"))]
use std::future::Future;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::avatar_field::AvatarField;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{IconUploadResponse, UserUpdateResponse};
#[cfg(feature = "hydrate")]
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;
use crate::util::upload::UploadPayload;
use crate::util::validate::validate_name;

/// Update the display name, then upload the avatar (when one was prepared)
/// with the same session token. As with signup, a failed icon upload is a
/// logged warning, not a failure: the rename already took effect.
///
/// # Errors
///
/// Returns the profile-update call's display string.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn save_profile_with<S, SFut, U, UFut, I>(
    name: String,
    icon: Option<I>,
    token: String,
    save: S,
    upload: U,
) -> Result<String, String>
where
    S: FnOnce(String, String) -> SFut,
    SFut: Future<Output = Result<UserUpdateResponse, String>>,
    U: FnOnce(I, String) -> UFut,
    UFut: Future<Output = Result<IconUploadResponse, String>>,
{
    let updated = save(name, token.clone()).await?;
    if let Some(icon) = icon {
        if let Err(err) = upload(icon, token).await {
            log::warn!("icon upload failed after profile update: {err}");
        }
    }
    Ok(updated.name)
}

#[component]
pub fn ProfileEditPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let name = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<&'static str>);
    let api_error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let file_error = RwSignal::new(None::<String>);
    let preview = RwSignal::new(None::<String>);
    let payload = RwSignal::new_local(None::<UploadPayload>);

    // Prefill once the session has settled.
    let prefilled = RwSignal::new(false);
    Effect::new(move || {
        if prefilled.get() {
            return;
        }
        let state = auth.get();
        if state.loading {
            return;
        }
        if let Some(user) = state.user {
            name.set(user.name);
            prefilled.set(true);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        let checked = validate_name(&name_value);
        name_error.set(checked);
        if checked.is_some() {
            return;
        }
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        api_error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let icon = payload.get_untracked();
            let result = save_profile_with(
                name_value,
                icon,
                token,
                |name, token| async move { crate::net::api::update_user(&name, &token).await },
                |file: UploadPayload, token: String| async move {
                    crate::net::api::upload_icon(&file, &token).await
                },
            )
            .await;
            match result {
                Ok(saved_name) => {
                    let email = auth.get_untracked().user.and_then(|u| u.email);
                    auth.update(|state| {
                        crate::state::auth::update_user(
                            &crate::state::session::BrowserStorage,
                            state,
                            User {
                                name: saved_name,
                                email,
                            },
                        );
                    });
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
        let _ = token;
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
                <h1>"Edit profile"</h1>
                <form class="form" on:submit=on_submit>
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
                        name_error.get().map(|m| view! { <p class="form-field__error">{m}</p> })
                    }}

                    <AvatarField error=file_error preview=preview payload=payload/>

                    <button class="form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>

                    <Show when=move || api_error.get().is_some()>
                        <p class="form__error">{move || api_error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || success.get()>
                        <p class="form__success">"Profile updated!"</p>
                    </Show>
                </form>
            </div>
        </Show>
    }
}
