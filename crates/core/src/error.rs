//! Domain-level error taxonomy.
//!
//! HTTP-specific concerns (status codes, response bodies) live in the api
//! crate; these variants only name what went wrong.

use crate::types::DbId;

/// Domain error shared across crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by id matched no row.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The request carried no usable credential.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The credential was valid but the role does not permit the operation.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}
