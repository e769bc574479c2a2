//! Delete Contact Use Case
//!
//! Removes a contact and hands back the record as it was before removal.

use std::sync::Arc;

use crate::domain::gateways::ContactRepository;
use crate::domain::models::contact::{Contact, ContactId};
use crate::shared::errors::UseCaseError;

/// Use case for deleting a contact
pub struct DeleteContactUseCase {
    contact_repository: Arc<dyn ContactRepository>,
}

impl DeleteContactUseCase {
    /// Create a new DeleteContactUseCase
    #[must_use]
    pub fn new(contact_repository: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the store call fails.
    pub async fn execute(&self, id: &ContactId) -> Result<Option<Contact>, UseCaseError> {
        tracing::info!(contact_id = %id, "Deleting contact");

        let deleted = self.contact_repository.delete(id).await?;

        match &deleted {
            Some(_) => tracing::info!(contact_id = %id, "Contact deleted successfully"),
            None => tracing::debug!(contact_id = %id, "No contact to delete"),
        }

        Ok(deleted)
    }
}
