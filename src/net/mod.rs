//! Networking modules for the remote review service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints behind typed async functions and `types`
//! defines the request/response schema shared with the server, including the
//! JSON error envelope.

pub mod api;
pub mod types;
