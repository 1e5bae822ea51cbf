//! Repository for the `administrators` table.

use sqlx::PgPool;

use frota_core::pagination::{page_offset, PAGE_SIZE};
use frota_core::types::DbId;

use crate::models::administrator::{Administrator, CreateAdministrator};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password, role";

/// Provides CRUD and credential-lookup operations for administrators.
pub struct AdministratorRepo;

impl AdministratorRepo {
    /// Insert a new administrator, returning the created row.
    ///
    /// Email uniqueness is not checked; duplicate emails can coexist.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdministrator,
    ) -> Result<Administrator, sqlx::Error> {
        let query = format!(
            "INSERT INTO administrators (email, password, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Administrator>(&query)
            .bind(&input.email)
            .bind(&input.password)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find an administrator by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Administrator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM administrators WHERE id = $1");
        sqlx::query_as::<_, Administrator>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an administrator whose email AND password both match exactly.
    ///
    /// The password column holds plain text and the comparison is string
    /// equality at the store level. With duplicate emails, the lowest id wins.
    pub async fn find_by_credentials(
        pool: &PgPool,
        email: &str,
        password: &str,
    ) -> Result<Option<Administrator>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM administrators
             WHERE email = $1 AND password = $2
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, Administrator>(&query)
            .bind(email)
            .bind(password)
            .fetch_optional(pool)
            .await
    }

    /// List one 10-row page of administrators ordered by id ascending.
    ///
    /// `page` is 1-indexed; `None` means the first page.
    pub async fn list_page(
        pool: &PgPool,
        page: Option<i64>,
    ) -> Result<Vec<Administrator>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM administrators
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Administrator>(&query)
            .bind(PAGE_SIZE)
            .bind(page_offset(page))
            .fetch_all(pool)
            .await
    }
}
