//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod contact;

pub use contact::{Contact, ContactFields, ContactId};
