//! Authentication and authorization extractors.
//!
//! - [`auth::AuthAdmin`] -- Extracts the authenticated administrator from a JWT Bearer token.
//! - [`rbac::RequireAdm`] -- Requires the `Adm` role.
//! - [`rbac::RequireEditor`] -- Requires `Editor` or `Adm` role.

pub mod auth;
pub mod rbac;
