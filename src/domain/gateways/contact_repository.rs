//! Contact Repository Gateway
//!
//! Abstract trait defining the contract for contact persistence operations.
//! Each method maps to exactly one store call.

use async_trait::async_trait;

use crate::domain::models::contact::{Contact, ContactFields, ContactId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Contact persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Find all contacts, in store order
    async fn find_all(&self) -> Result<Vec<Contact>, RepositoryError>;

    /// Create a new contact; the store assigns the identifier
    async fn create(&self, fields: &ContactFields) -> Result<Contact, RepositoryError>;

    /// Merge fields over an existing contact, returning the post-update record.
    /// Returns `None` when no contact has the given id.
    async fn update(
        &self,
        id: &ContactId,
        fields: &ContactFields,
    ) -> Result<Option<Contact>, RepositoryError>;

    /// Delete a contact, returning the record as it was before removal.
    /// Returns `None` when no contact has the given id.
    async fn delete(&self, id: &ContactId) -> Result<Option<Contact>, RepositoryError>;
}
