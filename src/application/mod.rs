//! Application Layer
//!
//! Use cases for the contacts resource. They depend on the repository
//! gateway trait, never on a concrete store.

pub mod use_cases;
