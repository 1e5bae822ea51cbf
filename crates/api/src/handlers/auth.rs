//! Login handler for the `/administrador` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use frota_core::error::CoreError;
use frota_db::repositories::AdministratorRepo;

use crate::auth::jwt::generate_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /administrador/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response: the administrator's identity plus the bearer
/// token. Transient -- never persisted.
#[derive(Debug, Serialize)]
pub struct LoggedAdmin {
    pub email: String,
    pub role: String,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /administrador/login
///
/// Authenticate with email + password. The store compares both columns by
/// exact string equality; any mismatch is a uniform 401.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoggedAdmin>> {
    let admin = AdministratorRepo::find_by_credentials(&state.pool, &input.email, &input.password)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let token = generate_token(&admin.email, &admin.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(LoggedAdmin {
        email: admin.email,
        role: admin.role,
        token,
    }))
}
