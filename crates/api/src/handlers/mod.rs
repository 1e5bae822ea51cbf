//! HTTP handlers, one module per resource.

pub mod administrator;
pub mod auth;
pub mod vehicle;
