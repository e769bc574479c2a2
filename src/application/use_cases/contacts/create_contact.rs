//! Create Contact Use Case
//!
//! Stores a new contact. The store assigns the identifier.

use std::sync::Arc;

use crate::domain::gateways::ContactRepository;
use crate::domain::models::contact::{Contact, ContactFields};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new contact
pub struct CreateContactUseCase {
    contact_repository: Arc<dyn ContactRepository>,
}

impl CreateContactUseCase {
    /// Create a new CreateContactUseCase
    #[must_use]
    pub fn new(contact_repository: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the store call fails.
    pub async fn execute(&self, fields: ContactFields) -> Result<Contact, UseCaseError> {
        tracing::info!("Creating new contact");

        let created = self.contact_repository.create(&fields).await?;

        tracing::info!(contact_id = %created.id(), "Contact created successfully");
        Ok(created)
    }
}
