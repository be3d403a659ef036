//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form controls and list entries while the owning pages
//! keep route-scoped orchestration and submission state.

pub mod avatar_field;
pub mod review_card;
