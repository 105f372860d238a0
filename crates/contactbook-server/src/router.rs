//! Router assembly for the contactbook HTTP API.
//!
//! [`build_router`] wires the three contact handlers to their routes with a
//! tracing middleware layer.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Other methods on these paths get 405 from axum; unknown paths get 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/contacts", get(handlers::contacts::list_contacts))
        .route("/contact", get(handlers::contacts::get_contact))
        .route("/contact/create", post(handlers::contacts::create_contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
