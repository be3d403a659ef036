//! Auth-session state and lifecycle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided app-wide as `RwSignal<AuthState>`; route guards and user-aware
//! components read it to coordinate login redirects and identity-dependent
//! rendering. Every transition is a single whole-state replace, so readers
//! never observe a token without its user or vice versa.
//!
//! DESIGN
//! ======
//! The lifecycle functions are generic over their remote calls and take the
//! storage port explicitly, which keeps the sequencing rules (validate ->
//! authenticate -> fetch profile -> persist) testable without a browser.
//! Thin `hydrate` wrappers bind them to the real API client and storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use crate::net::types::{User, UserGetResponse};
use crate::state::session::{self, StoragePort};

/// Authentication state tracking the current user, token, and loading status.
///
/// Starts in the loading phase; session initialization replaces it exactly
/// once with a settled state.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// A session exists only when both the token and the cached user are set.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn unauthenticated() -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
        }
    }

    pub fn authenticated(token: String, user: User) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            loading: false,
        }
    }
}

/// Restore the persisted session and revalidate its token against the
/// profile endpoint. A valid token refreshes the cached display name; any
/// failure clears both slots. The returned state is always settled
/// (`loading == false`), whichever path ran.
pub async fn initialize_with<P, Fut>(fetch_profile: P, storage: &dyn StoragePort) -> AuthState
where
    P: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<UserGetResponse, String>>,
{
    let Some((token, saved)) = session::load_session(storage) else {
        return AuthState::unauthenticated();
    };
    match fetch_profile(token.clone()).await {
        Ok(info) => AuthState::authenticated(
            token,
            User {
                name: info.name,
                email: saved.email,
            },
        ),
        Err(err) => {
            log::warn!("stored session token rejected: {err}");
            session::clear_session(storage);
            AuthState::unauthenticated()
        }
    }
}

/// Sign in: authenticate for a token, then fetch the profile with it. Only
/// when both calls succeed are memory and storage replaced; any failure
/// propagates unchanged and leaves the previous session state intact.
///
/// # Errors
///
/// Returns the display string from whichever remote call failed.
pub async fn login_with<A, AFut, P, PFut>(
    email: &str,
    password: &str,
    authenticate: A,
    fetch_profile: P,
    storage: &dyn StoragePort,
) -> Result<AuthState, String>
where
    A: FnOnce(String, String) -> AFut,
    AFut: Future<Output = Result<String, String>>,
    P: FnOnce(String) -> PFut,
    PFut: Future<Output = Result<UserGetResponse, String>>,
{
    let token = authenticate(email.to_owned(), password.to_owned()).await?;
    let info = fetch_profile(token.clone()).await?;
    let user = User {
        name: info.name,
        email: Some(email.to_owned()),
    };
    session::save_session(storage, &token, &user);
    Ok(AuthState::authenticated(token, user))
}

/// Drop the session: both persisted slots are removed and the returned
/// state is unauthenticated. Never fails.
pub fn logout(storage: &dyn StoragePort) -> AuthState {
    session::clear_session(storage);
    AuthState::unauthenticated()
}

/// Replace the cached user and its persisted slot; the token is untouched.
pub fn update_user(storage: &dyn StoragePort, state: &mut AuthState, user: User) {
    session::save_user(storage, &user);
    state.user = Some(user);
}

/// Browser binding of [`initialize_with`].
#[cfg(feature = "hydrate")]
pub async fn initialize() -> AuthState {
    initialize_with(
        |token| async move { crate::net::api::fetch_user(&token).await },
        &session::BrowserStorage,
    )
    .await
}

/// Browser binding of [`login_with`].
///
/// # Errors
///
/// Returns the display string from whichever remote call failed.
#[cfg(feature = "hydrate")]
pub async fn login(email: &str, password: &str) -> Result<AuthState, String> {
    login_with(
        email,
        password,
        |email, password| async move {
            crate::net::api::sign_in(&email, &password).await.map(|r| r.token)
        },
        |token| async move { crate::net::api::fetch_user(&token).await },
        &session::BrowserStorage,
    )
    .await
}
