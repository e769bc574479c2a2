//! Driving Adapters
//!
//! Entry points that drive the application: the REST API.

pub mod api_rest;
