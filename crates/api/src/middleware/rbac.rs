//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthAdmin`] and rejects requests whose role does
//! not meet the route's requirement. Use these in route handlers to enforce
//! authorization at the type level. A role outside the known set fails every
//! check.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use frota_core::error::CoreError;
use frota_core::roles::{ROLE_ADM, ROLE_EDITOR};

use super::auth::AuthAdmin;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `Adm` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn adm_only(RequireAdm(admin): RequireAdm) -> AppResult<Json<()>> {
///     // admin is guaranteed to hold the Adm role here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdm(pub AuthAdmin);

impl FromRequestParts<AppState> for RequireAdm {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = AuthAdmin::from_request_parts(parts, state).await?;
        if admin.role != ROLE_ADM {
            return Err(AppError::Core(CoreError::Forbidden(
                "Adm role required".into(),
            )));
        }
        Ok(RequireAdm(admin))
    }
}

/// Requires `Editor` or `Adm` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn editor_or_adm(RequireEditor(admin): RequireEditor) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireEditor(pub AuthAdmin);

impl FromRequestParts<AppState> for RequireEditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = AuthAdmin::from_request_parts(parts, state).await?;
        if admin.role != ROLE_ADM && admin.role != ROLE_EDITOR {
            return Err(AppError::Core(CoreError::Forbidden(
                "Editor or Adm role required".into(),
            )));
        }
        Ok(RequireEditor(admin))
    }
}
