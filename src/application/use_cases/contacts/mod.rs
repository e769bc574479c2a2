//! Contact Use Cases
//!
//! Application logic for managing contacts. Each use case performs a single
//! repository call.

mod create_contact;
mod delete_contact;
mod list_contacts;
mod update_contact;

pub use create_contact::CreateContactUseCase;
pub use delete_contact::DeleteContactUseCase;
pub use list_contacts::ListContactsUseCase;
pub use update_contact::UpdateContactUseCase;
