//! REST API Module
//!
//! Contains HTTP handlers, DTOs, middleware and the router for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

use std::sync::Arc;

use crate::application::use_cases::contacts::{
    CreateContactUseCase, DeleteContactUseCase, ListContactsUseCase, UpdateContactUseCase,
};
use crate::domain::gateways::ContactRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub list_contacts_use_case: Arc<ListContactsUseCase>,
    pub create_contact_use_case: Arc<CreateContactUseCase>,
    pub update_contact_use_case: Arc<UpdateContactUseCase>,
    pub delete_contact_use_case: Arc<DeleteContactUseCase>,
}

impl AppState {
    /// Wire every use case to the given repository
    #[must_use]
    pub fn new(contact_repository: Arc<dyn ContactRepository>) -> Self {
        Self {
            list_contacts_use_case: Arc::new(ListContactsUseCase::new(contact_repository.clone())),
            create_contact_use_case: Arc::new(CreateContactUseCase::new(
                contact_repository.clone(),
            )),
            update_contact_use_case: Arc::new(UpdateContactUseCase::new(
                contact_repository.clone(),
            )),
            delete_contact_use_case: Arc::new(DeleteContactUseCase::new(contact_repository)),
        }
    }
}
