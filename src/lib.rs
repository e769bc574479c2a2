//! Contacts API
//!
//! A small REST service for managing contact records, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
