//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the auth forms while reading/writing
//! shared state from Leptos context providers.

pub mod auth_modal;
pub mod event_card;
pub mod login_form;
pub mod nav;
pub mod register_form;
