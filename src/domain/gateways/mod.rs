//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod contact_repository;

pub use contact_repository::ContactRepository;
