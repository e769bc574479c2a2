//! List Contacts Use Case
//!
//! Retrieves every contact in store order.

use std::sync::Arc;

use crate::domain::gateways::ContactRepository;
use crate::domain::models::contact::Contact;
use crate::shared::errors::UseCaseError;

/// Use case for listing all contacts
pub struct ListContactsUseCase {
    contact_repository: Arc<dyn ContactRepository>,
}

impl ListContactsUseCase {
    /// Create a new ListContactsUseCase
    #[must_use]
    pub fn new(contact_repository: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the store call fails.
    pub async fn execute(&self) -> Result<Vec<Contact>, UseCaseError> {
        tracing::debug!("Listing contacts");

        let contacts = self.contact_repository.find_all().await?;

        tracing::debug!(count = contacts.len(), "Found contacts");
        Ok(contacts)
    }
}
