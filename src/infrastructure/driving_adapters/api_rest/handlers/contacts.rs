//! Contact Handlers
//!
//! HTTP handlers for contact CRUD operations.
//! A missing contact on update or delete answers 200 with a `null` body.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, put},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::contact::ContactId;
use crate::infrastructure::driving_adapters::api_rest::dto::contact::{
    ContactPayloadDto, ContactResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for contact endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contacts).post(create_contact))
        .route("/:id", put(update_contact).delete(delete_contact))
}

/// GET /contacts - List all contacts
///
/// # Responses
///
/// * 200 OK - Every contact, in store order
/// * 500 / 503 - Store failure
#[axum::debug_handler]
async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactResponseDto>>, ApiError> {
    let contacts = state.list_contacts_use_case.execute().await?;

    let response: Vec<ContactResponseDto> =
        contacts.into_iter().map(ContactResponseDto::from).collect();
    Ok(Json(response))
}

/// POST /contacts - Create a contact
///
/// # Responses
///
/// * 200 OK - The created contact, including its `_id`
/// * 400 Bad Request - Malformed JSON or a field failed validation
/// * 500 / 503 - Store failure
#[axum::debug_handler]
async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactPayloadDto>, JsonRejection>,
) -> Result<Json<ContactResponseDto>, ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let contact = state.create_contact_use_case.execute(dto.into()).await?;

    Ok(Json(ContactResponseDto::from(contact)))
}

/// PUT /contacts/:id - Merge fields into a contact
///
/// # Responses
///
/// * 200 OK - The merged contact, or `null` if no contact has this id
/// * 400 Bad Request - Id is not a UUID, malformed JSON, or validation error
/// * 500 / 503 - Store failure
#[axum::debug_handler]
async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ContactPayloadDto>, JsonRejection>,
) -> Result<Json<Option<ContactResponseDto>>, ApiError> {
    let contact_id = ContactId::try_from(id.as_str())?;
    let Json(dto) = payload?;
    dto.validate()?;

    let contact = state
        .update_contact_use_case
        .execute(&contact_id, dto.into())
        .await?;

    Ok(Json(contact.map(ContactResponseDto::from)))
}

/// DELETE /contacts/:id - Delete a contact
///
/// # Responses
///
/// * 200 OK - The contact as it was before removal, or `null` if no contact has this id
/// * 400 Bad Request - Id is not a UUID
/// * 500 / 503 - Store failure
#[axum::debug_handler]
async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<ContactResponseDto>>, ApiError> {
    let contact_id = ContactId::try_from(id.as_str())?;

    let contact = state.delete_contact_use_case.execute(&contact_id).await?;

    Ok(Json(contact.map(ContactResponseDto::from)))
}
