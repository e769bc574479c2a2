//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod contact;

pub use contact::{ContactPayloadDto, ContactResponseDto};
