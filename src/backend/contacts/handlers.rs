//! HTTP handlers for `/contacts`.
//!
//! All of them need a [`CurrentUser`], so they only work behind the auth
//! middleware. Path ids that are not UUIDs cannot name a stored contact
//! and are reported as not found.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::backend::auth::resolver::CurrentUser;
use crate::backend::contacts::service::ContactService;
use crate::backend::error::BackendError;
use crate::backend::validation::Validate;
use crate::shared::{Contact, ContactRequest};

fn parse_contact_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::debug!("Malformed contact id: {}", raw);
        BackendError::not_found("The Contact is not found")
    })
}

/// POST /contacts
pub async fn create_contact(
    State(contacts): State<ContactService>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), BackendError> {
    let Json(fields) = payload?;
    fields.validate()?;

    let contact = contacts.create(&user, fields).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /contacts
pub async fn list_contacts(
    State(contacts): State<ContactService>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Contact>>, BackendError> {
    Ok(Json(contacts.list(&user).await?))
}

/// GET /contacts/{contact_id}
pub async fn get_contact(
    State(contacts): State<ContactService>,
    CurrentUser(user): CurrentUser,
    Path(contact_id): Path<String>,
) -> Result<Json<Contact>, BackendError> {
    let id = parse_contact_id(&contact_id)?;
    Ok(Json(contacts.get(&user, id).await?))
}

/// PUT /contacts/{contact_id}
///
/// Full replacement: the body carries the same seven fields as create.
pub async fn update_contact(
    State(contacts): State<ContactService>,
    CurrentUser(user): CurrentUser,
    Path(contact_id): Path<String>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<Contact>, BackendError> {
    let Json(fields) = payload?;
    fields.validate()?;

    let id = parse_contact_id(&contact_id)?;
    Ok(Json(contacts.update(&user, id, fields).await?))
}

/// DELETE /contacts/{contact_id}
///
/// Responds with an empty JSON object.
pub async fn delete_contact(
    State(contacts): State<ContactService>,
    CurrentUser(user): CurrentUser,
    Path(contact_id): Path<String>,
) -> Result<Json<Value>, BackendError> {
    let id = parse_contact_id(&contact_id)?;
    contacts.delete(&user, id).await?;
    Ok(Json(json!({})))
}
