//! Handlers for the `/administrador` resource (account management).
//!
//! All handlers here require the `Adm` role via [`RequireAdm`]; login lives
//! in [`super::auth`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use frota_core::error::CoreError;
use frota_core::roles::Role;
use frota_core::types::DbId;
use frota_db::models::administrator::{AdministratorResponse, CreateAdministrator};
use frota_db::repositories::AdministratorRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdm;
use crate::query::ListParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /administrador`.
///
/// `role` is the only place the Adm/Editor enumeration is enforced; the
/// stored column is free text.
#[derive(Debug, Deserialize)]
pub struct CreateAdministratorRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /administrador
///
/// Create a new administrator account. Returns 201 with no body. Email
/// uniqueness is deliberately not checked.
pub async fn create(
    State(state): State<AppState>,
    RequireAdm(_admin): RequireAdm,
    Json(input): Json<CreateAdministratorRequest>,
) -> AppResult<StatusCode> {
    let create_dto = CreateAdministrator {
        email: input.email,
        password: input.password,
        role: input.role.as_str().to_string(),
    };

    AdministratorRepo::create(&state.pool, &create_dto).await?;

    Ok(StatusCode::CREATED)
}

/// GET /administrador?pagina=N
///
/// List one 10-row page of administrators, password column omitted.
pub async fn list(
    State(state): State<AppState>,
    RequireAdm(_admin): RequireAdm,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<AdministratorResponse>>> {
    let administrators = AdministratorRepo::list_page(&state.pool, params.pagina).await?;

    let responses: Vec<AdministratorResponse> =
        administrators.iter().map(AdministratorResponse::from).collect();

    Ok(Json(responses))
}

/// GET /administrador/{id}
///
/// Get a single administrator by ID, password column omitted.
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdm(_admin): RequireAdm,
    Path(id): Path<DbId>,
) -> AppResult<Json<AdministratorResponse>> {
    let administrator = AdministratorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Administrator",
            id,
        }))?;

    Ok(Json(AdministratorResponse::from(&administrator)))
}
