//! Contact DTOs
//!
//! Data transfer objects for contact API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::contact::{Contact, ContactFields};

/// DTO for creating or updating a contact
///
/// All fields are optional. On update, only provided fields are changed.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactPayloadDto {
    #[validate(length(max = 1024, message = "name must be at most 1024 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1024, message = "email must be at most 1024 characters"))]
    pub email: Option<String>,

    #[validate(length(max = 1024, message = "phone must be at most 1024 characters"))]
    pub phone: Option<String>,
}

impl From<ContactPayloadDto> for ContactFields {
    fn from(dto: ContactPayloadDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
        }
    }
}

/// Contact response DTO
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponseDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<Contact> for ContactResponseDto {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id().to_string(),
            name: contact.name().map(str::to_string),
            email: contact.email().map(str::to_string),
            phone: contact.phone().map(str::to_string),
        }
    }
}
