//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (validation, submission state,
//! remote-call sequencing) and delegates rendering details to `components`.

pub mod detail;
pub mod edit;
pub mod list;
pub mod login;
pub mod post;
pub mod profile_edit;
pub mod signup;
pub mod top;

/// Delay before the post-success navigation away from a submitted form.
#[cfg(feature = "hydrate")]
pub(crate) const SUCCESS_REDIRECT_MS: u64 = 1000;
