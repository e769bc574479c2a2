//! Update Contact Use Case
//!
//! Merges the supplied fields over an existing contact. A missing contact is
//! not an error: the result is simply `None`.

use std::sync::Arc;

use crate::domain::gateways::ContactRepository;
use crate::domain::models::contact::{Contact, ContactFields, ContactId};
use crate::shared::errors::UseCaseError;

/// Use case for updating a contact (merge semantics)
pub struct UpdateContactUseCase {
    contact_repository: Arc<dyn ContactRepository>,
}

impl UpdateContactUseCase {
    /// Create a new UpdateContactUseCase
    #[must_use]
    pub fn new(contact_repository: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the store call fails.
    pub async fn execute(
        &self,
        id: &ContactId,
        fields: ContactFields,
    ) -> Result<Option<Contact>, UseCaseError> {
        tracing::info!(contact_id = %id, empty = fields.is_empty(), "Updating contact");

        let updated = self.contact_repository.update(id, &fields).await?;

        match &updated {
            Some(_) => tracing::info!(contact_id = %id, "Contact updated successfully"),
            None => tracing::debug!(contact_id = %id, "No contact to update"),
        }

        Ok(updated)
    }
}
