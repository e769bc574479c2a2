//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Contact repositories (PostgreSQL, in-memory)
//! - Configuration
//! - Database pool and migrations

pub mod config;
pub mod contact_repository;
pub mod database;

pub use config::AppConfig;
pub use contact_repository::{InMemoryContactRepository, PostgresContactRepository};
