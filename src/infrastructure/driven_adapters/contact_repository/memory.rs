//! In-Memory Contact Repository Implementation
//!
//! Keeps contacts in insertion order behind an async `RwLock`. Nothing is
//! persisted; the store starts empty on every boot.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::ContactRepository;
use crate::domain::models::contact::{Contact, ContactFields, ContactId};
use crate::shared::errors::RepositoryError;

/// In-memory implementation of ContactRepository
#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn find_all(&self) -> Result<Vec<Contact>, RepositoryError> {
        Ok(self.contacts.read().await.clone())
    }

    async fn create(&self, fields: &ContactFields) -> Result<Contact, RepositoryError> {
        let mut contacts = self.contacts.write().await;

        // the store owns id uniqueness
        let mut id = ContactId::new();
        while contacts.iter().any(|c| c.id() == &id) {
            id = ContactId::new();
        }

        let contact = Contact::new(id, fields.clone());
        contacts.push(contact.clone());
        Ok(contact)
    }

    async fn update(
        &self,
        id: &ContactId,
        fields: &ContactFields,
    ) -> Result<Option<Contact>, RepositoryError> {
        let mut contacts = self.contacts.write().await;

        let Some(slot) = contacts.iter_mut().find(|c| c.id() == id) else {
            return Ok(None);
        };

        let merged = slot.clone().merge(fields.clone());
        *slot = merged.clone();
        Ok(Some(merged))
    }

    async fn delete(&self, id: &ContactId) -> Result<Option<Contact>, RepositoryError> {
        let mut contacts = self.contacts.write().await;

        Ok(contacts
            .iter()
            .position(|c| c.id() == id)
            .map(|index| contacts.remove(index)))
    }
}
