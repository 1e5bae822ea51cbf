//! Repository for the `vehicles` table.

use sqlx::PgPool;

use frota_core::pagination::{page_offset, PAGE_SIZE};
use frota_core::types::DbId;

use crate::models::vehicle::{CreateVehicle, Vehicle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, brand, year";

/// Provides CRUD and paginated-search operations for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles (name, brand, year)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&input.name)
            .bind(&input.brand)
            .bind(input.year)
            .fetch_one(pool)
            .await
    }

    /// Find a vehicle by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one 10-row page of vehicles ordered by id ascending.
    ///
    /// `page` is 1-indexed; `None` means the first page. A non-empty `name`
    /// restricts the listing to rows whose name contains it, ignoring case.
    /// The `brand` argument is part of the listing contract but is not applied
    /// as a predicate.
    // TODO: apply the brand filter once the listing endpoint exposes it.
    pub async fn list_page(
        pool: &PgPool,
        page: Option<i64>,
        name: Option<&str>,
        _brand: Option<&str>,
    ) -> Result<Vec<Vehicle>, sqlx::Error> {
        let offset = page_offset(page);

        match name.filter(|n| !n.is_empty()) {
            Some(name) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM vehicles
                     WHERE name ILIKE '%' || $3 || '%'
                     ORDER BY id ASC
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, Vehicle>(&query)
                    .bind(PAGE_SIZE)
                    .bind(offset)
                    .bind(name)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM vehicles
                     ORDER BY id ASC
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, Vehicle>(&query)
                    .bind(PAGE_SIZE)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Full replace of name/brand/year for the row with `vehicle.id`.
    ///
    /// The caller has already fetched the row; there is no concurrency token,
    /// so a row deleted in between simply makes this a no-op.
    pub async fn update(pool: &PgPool, vehicle: &Vehicle) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE vehicles SET name = $2, brand = $3, year = $4
             WHERE id = $1",
        )
        .bind(vehicle.id)
        .bind(&vehicle.name)
        .bind(&vehicle.brand)
        .bind(vehicle.year)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove the row with `vehicle.id`. The caller has already fetched it.
    pub async fn delete(pool: &PgPool, vehicle: &Vehicle) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(vehicle.id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
