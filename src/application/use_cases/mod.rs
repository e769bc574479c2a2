//! Use Cases
//!
//! Application-specific rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod contacts;

pub use contacts::{
    CreateContactUseCase, DeleteContactUseCase, ListContactsUseCase, UpdateContactUseCase,
};
