//! Avatar file input with validation error and preview display.

use leptos::prelude::*;

use crate::util::upload::UploadPayload;

/// File input for the avatar field. Selection runs the upload pipeline and
/// publishes its outcome into the three signals owned by the parent form;
/// the parent attaches `payload` to its submission when present.
#[component]
pub fn AvatarField(
    error: RwSignal<Option<String>>,
    preview: RwSignal<Option<String>>,
    payload: RwSignal<Option<UploadPayload>, LocalStorage>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.item(0)) else {
                return;
            };
            crate::util::upload::handle_selection(file, preview, error, payload);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };
    #[cfg(not(feature = "hydrate"))]
    let _ = payload;

    view! {
        <label class="form-field">
            "Avatar"
            <input
                class="form-field__input"
                type="file"
                accept="image/jpeg,image/png"
                on:change=on_change
            />
        </label>
        {move || {
            error
                .get()
                .map(|message| view! { <p class="form-field__error">{message}</p> })
        }}
        {move || {
            preview
                .get()
                .map(|data_url| {
                    view! {
                        <img class="form-field__preview" src=data_url alt="Avatar preview"/>
                    }
                })
        }}
    }
}
