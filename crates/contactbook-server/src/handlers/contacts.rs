//! Contact handlers (list, get, create).

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use contactbook_storage::{Contact, ContactId, NewContact};

use crate::error::ApiError;
use crate::schema::contacts::{lookup_id, CreateContactRequest};
use crate::state::AppState;

/// Lists all contacts.
///
/// `GET /contacts`
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.store.list()?;
    Ok(Json(contacts))
}

/// Fetches one contact by id.
///
/// `GET /contact?id=<id>`
///
/// The query is taken as raw pairs so a repeated `id` resolves to its first
/// value instead of failing extraction.
pub async fn get_contact(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Contact>, ApiError> {
    let contact = state.store.get(&ContactId(lookup_id(&params)))?;
    Ok(Json(contact))
}

/// Creates a contact with a registry-assigned id.
///
/// `POST /contact/create`
///
/// The body is decoded from raw bytes so that any decoding failure, whatever
/// the `Content-Type`, is a 400 and never reaches the store.
pub async fn create_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let req: CreateContactRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid request: {}", e)))?;
    let contact = state.store.insert(NewContact::from(req))?;
    Ok((StatusCode::CREATED, Json(contact)))
}
