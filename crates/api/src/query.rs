//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters for listing endpoints (`?pagina=N`).
///
/// The page number is 1-indexed; an absent value means the first page.
/// Resolution to a row offset happens in the repository layer via
/// `frota_core::pagination::page_offset`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub pagina: Option<i64>,
}
