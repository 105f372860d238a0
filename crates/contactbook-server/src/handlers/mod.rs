//! HTTP handler modules for the contactbook API.
//!
//! Handlers are thin: they parse the request, delegate to the
//! [`ContactStore`](contactbook_storage::ContactStore) in [`AppState`](crate::state::AppState),
//! and return JSON responses. No business logic lives in handlers.

pub mod contacts;
