//! Domain Layer
//!
//! Contains the contact model and the repository gateway trait (port).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::contact_repository::ContactRepository;
pub use models::contact::{Contact, ContactFields, ContactId};
