//! Shared application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` owns the session lifecycle exposed to every page through a Leptos
//! context signal; `session` mirrors that state to browser localStorage
//! behind a storage port so the lifecycle logic stays testable off-browser.

pub mod auth;
pub mod session;
