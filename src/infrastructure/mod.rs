//! Infrastructure Layer
//!
//! Driving adapters (the HTTP API) and driven adapters (stores,
//! configuration, database pool).

pub mod driven_adapters;
pub mod driving_adapters;
