//! Handlers for the `/veiculos` resource.
//!
//! Reads are public; create/update/delete require `Editor` or `Adm` via
//! [`RequireEditor`]. Payloads pass through the validation routine before
//! touching the store, and a failed validation (400) takes precedence over a
//! missing row (404) on update.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use frota_core::error::CoreError;
use frota_core::types::DbId;
use frota_core::validation::validate_vehicle;
use frota_db::models::vehicle::{CreateVehicle, Vehicle};
use frota_db::repositories::VehicleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::ListParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /veiculos` and `PUT /veiculos/{id}`.
#[derive(Debug, Deserialize)]
pub struct VehicleRequest {
    pub name: String,
    pub brand: String,
    pub year: i32,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /veiculos
///
/// Validate and create a vehicle. Returns 201 with no body.
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_admin): RequireEditor,
    Json(input): Json<VehicleRequest>,
) -> AppResult<StatusCode> {
    let messages = validate_vehicle(&input.name, &input.brand, input.year);
    if !messages.is_empty() {
        return Err(AppError::Validation(messages));
    }

    let create_dto = CreateVehicle {
        name: input.name,
        brand: input.brand,
        year: input.year,
    };
    VehicleRepo::create(&state.pool, &create_dto).await?;

    Ok(StatusCode::CREATED)
}

/// GET /veiculos?pagina=N
///
/// Public listing of one 10-row page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Vehicle>>> {
    let vehicles = VehicleRepo::list_page(&state.pool, params.pagina, None, None).await?;
    Ok(Json(vehicles))
}

/// GET /veiculos/{id}
///
/// Public lookup of a single vehicle.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = find_vehicle(&state, id).await?;
    Ok(Json(vehicle))
}

/// PUT /veiculos/{id}
///
/// Full replace of name/brand/year. Validates first, then fetches, then
/// writes; the fetch-then-write pair is two statements with no concurrency
/// token.
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_admin): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<VehicleRequest>,
) -> AppResult<Json<Vehicle>> {
    let messages = validate_vehicle(&input.name, &input.brand, input.year);
    if !messages.is_empty() {
        return Err(AppError::Validation(messages));
    }

    let mut vehicle = find_vehicle(&state, id).await?;
    vehicle.name = input.name;
    vehicle.brand = input.brand;
    vehicle.year = input.year;

    VehicleRepo::update(&state.pool, &vehicle).await?;

    Ok(Json(vehicle))
}

/// DELETE /veiculos/{id}
///
/// Remove a vehicle, returning the removed row.
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_admin): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = find_vehicle(&state, id).await?;

    VehicleRepo::delete(&state.pool, &vehicle).await?;

    Ok(Json(vehicle))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

async fn find_vehicle(state: &AppState, id: DbId) -> AppResult<Vehicle> {
    VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))
}
