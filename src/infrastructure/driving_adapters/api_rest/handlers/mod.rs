//! HTTP Handlers

pub mod contacts;
pub mod site;
