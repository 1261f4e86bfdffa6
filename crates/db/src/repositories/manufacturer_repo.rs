//! Repository for the `manufacturers` table.

use catalogue_core::page::{Page, PageRequest};
use catalogue_core::sort::SortSpec;
use catalogue_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::manufacturer::{CreateManufacturer, Manufacturer, UpdateManufacturer};
use crate::sorting::order_by_clause;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, nationality, created_at, updated_at";

/// Columns accepted in caller-supplied sort criteria.
const SORTABLE_COLUMNS: &[&str] = &["id", "name", "nationality"];

/// Provides CRUD operations for manufacturers.
pub struct ManufacturerRepo;

impl ManufacturerRepo {
    /// Insert a new manufacturer, returning the created row. The id is
    /// assigned by the database.
    pub async fn create(
        pool: &PgPool,
        input: &CreateManufacturer,
    ) -> Result<Manufacturer, sqlx::Error> {
        let query = format!(
            "INSERT INTO manufacturers (name, nationality)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Manufacturer>(&query)
            .bind(&input.name)
            .bind(&input.nationality)
            .fetch_one(pool)
            .await
    }

    /// Find a manufacturer by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Manufacturer>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM manufacturers WHERE id = $1 AND deleted = FALSE");
        sqlx::query_as::<_, Manufacturer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a non-deleted manufacturer with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM manufacturers WHERE id = $1 AND deleted = FALSE)",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// List manufacturers ordered by the caller's sort criteria.
    /// Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        sort: &SortSpec,
        page: &PageRequest,
    ) -> Result<Page<Manufacturer>, DbError> {
        let order_by = order_by_clause(sort, SORTABLE_COLUMNS)?;
        let query = format!(
            "SELECT {COLUMNS} FROM manufacturers
             WHERE deleted = FALSE
             {order_by}
             LIMIT $1 OFFSET $2"
        );
        let content = sqlx::query_as::<_, Manufacturer>(&query)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM manufacturers WHERE deleted = FALSE",
        )
        .fetch_one(pool)
        .await?;
        Ok(Page::new(content, total, page))
    }

    /// Update a manufacturer. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if no visible row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateManufacturer,
    ) -> Result<Option<Manufacturer>, sqlx::Error> {
        let query = format!(
            "UPDATE manufacturers SET
                name = COALESCE($2, name),
                nationality = COALESCE($3, nationality),
                updated_at = NOW()
             WHERE id = $1 AND deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Manufacturer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.nationality)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a manufacturer together with the beers it owns, in
    /// one transaction. Returns `true` if the manufacturer row was
    /// marked deleted; already-deleted and unknown ids both return
    /// `false`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "UPDATE manufacturers SET deleted = TRUE, updated_at = NOW()
             WHERE id = $1 AND deleted = FALSE",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        if result.rows_affected() == 0 {
            return Ok(false);
        }
        let cascaded = sqlx::query(
            "UPDATE beers SET deleted = TRUE, updated_at = NOW()
             WHERE manufacturer_id = $1 AND deleted = FALSE",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::debug!(
            manufacturer_id = id,
            beers = cascaded.rows_affected(),
            "Soft-deleted manufacturer and owned beers"
        );
        Ok(true)
    }
}
