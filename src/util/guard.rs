//! Route guarding for authenticated destinations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components apply identical behavior: render nothing while
//! the session is still loading, redirect to `/login` once it settles
//! unauthenticated, render content otherwise. The redirect effect is a
//! subscription, so a mid-visit logout or token revocation also triggers it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// What a protected route should do for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still loading: render neither content nor a redirect.
    Wait,
    /// Settled without a session: send the visitor to the login page.
    RedirectToLogin,
    /// Settled with a session: render the guarded content.
    Render,
}

pub fn guard_outcome(loading: bool, authenticated: bool) -> GuardOutcome {
    if loading {
        GuardOutcome::Wait
    } else if authenticated {
        GuardOutcome::Render
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Redirect to `/login` whenever auth has settled with no session present.
/// The history entry is replaced so back-navigation does not bounce straight
/// back into the guarded page.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if guard_outcome(state.loading, state.is_authenticated()) == GuardOutcome::RedirectToLogin {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
