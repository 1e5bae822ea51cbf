//! Administrator entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use frota_core::types::DbId;

/// Full administrator row from the `administrators` table.
///
/// Contains the password column -- NEVER serialize this to API responses
/// directly. Use [`AdministratorResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Administrator {
    pub id: DbId,
    pub email: String,
    pub password: String,
    /// Role name (`"Adm"` or `"Editor"` in practice; free text in storage).
    pub role: String,
}

/// Safe administrator representation for API responses (no password).
#[derive(Debug, Clone, Serialize)]
pub struct AdministratorResponse {
    pub id: DbId,
    pub email: String,
    pub role: String,
}

impl From<&Administrator> for AdministratorResponse {
    fn from(adm: &Administrator) -> Self {
        Self {
            id: adm.id,
            email: adm.email.clone(),
            role: adm.role.clone(),
        }
    }
}

/// DTO for inserting a new administrator.
#[derive(Debug)]
pub struct CreateAdministrator {
    pub email: String,
    pub password: String,
    pub role: String,
}
