//! Landing page with navigation into the signup/login and review flows.

use leptos::prelude::*;

#[component]
pub fn TopPage() -> impl IntoView {
    view! {
        <div class="top-page">
            <h1>"Book Reviews"</h1>
            <nav class="top-page__links">
                <a class="top-page__link" href="/signup">
                    "Sign up"
                </a>
                <a class="top-page__link" href="/login">
                    "Log in"
                </a>
                <a class="top-page__link" href="/list">
                    "Reviews"
                </a>
                <a class="top-page__link" href="/post">
                    "Write a review"
                </a>
                <a class="top-page__link" href="/user/edit">
                    "Edit profile"
                </a>
            </nav>
        </div>
    }
}
