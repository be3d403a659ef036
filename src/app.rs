//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    detail::DetailPage, edit::EditPage, list::ListPage, login::LoginPage, post::PostPage,
    profile_edit::ProfileEditPage, signup::SignupPage, top::TopPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth-session context, kicks off the one-shot session
/// restore, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session state starts in the loading phase; initialization settles it
    // exactly once, whichever way the revalidation went.
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let state = crate::state::auth::initialize().await;
        auth.set(state);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/bookreview-client.css"/>
        <Title text="Book Reviews"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TopPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("user"), StaticSegment("edit")) view=ProfileEditPage/>
                <Route path=StaticSegment("list") view=ListPage/>
                <Route path=StaticSegment("post") view=PostPage/>
                <Route path=(StaticSegment("detail"), ParamSegment("id")) view=DetailPage/>
                <Route path=(StaticSegment("edit"), ParamSegment("id")) view=EditPage/>
            </Routes>
        </Router>
    }
}
