//! Vehicle entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use frota_core::types::DbId;

/// A vehicle row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub name: String,
    pub brand: String,
    pub year: i32,
}

/// DTO for inserting a new vehicle.
#[derive(Debug)]
pub struct CreateVehicle {
    pub name: String,
    pub brand: String,
    pub year: i32,
}
