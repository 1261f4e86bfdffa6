//! Repository for the `beers` table.

use catalogue_core::page::{Page, PageRequest};
use catalogue_core::sort::SortSpec;
use catalogue_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::beer::{Beer, CreateBeer, UpdateBeer};
use crate::sorting::order_by_clause;

/// Column list shared across queries to avoid repetition. `type` is
/// quoted because it doubles as an SQL keyword.
const COLUMNS: &str =
    "id, name, graduation, \"type\", description, manufacturer_id, created_at, updated_at";

/// Columns accepted in caller-supplied sort criteria.
const SORTABLE_COLUMNS: &[&str] = &[
    "id",
    "name",
    "graduation",
    "type",
    "description",
    "manufacturer_id",
];

/// Provides CRUD operations for beers.
pub struct BeerRepo;

impl BeerRepo {
    /// Insert a new beer, returning the created row. The id is assigned
    /// by the database; the referenced manufacturer must exist.
    pub async fn create(pool: &PgPool, input: &CreateBeer) -> Result<Beer, sqlx::Error> {
        let query = format!(
            "INSERT INTO beers (name, graduation, \"type\", description, manufacturer_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Beer>(&query)
            .bind(&input.name)
            .bind(&input.graduation)
            .bind(&input.beer_type)
            .bind(&input.description)
            .bind(input.manufacturer_id)
            .fetch_one(pool)
            .await
    }

    /// Find a beer by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Beer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM beers WHERE id = $1 AND deleted = FALSE");
        sqlx::query_as::<_, Beer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List beers ordered by the caller's sort criteria. Excludes
    /// soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        sort: &SortSpec,
        page: &PageRequest,
    ) -> Result<Page<Beer>, DbError> {
        let order_by = order_by_clause(sort, SORTABLE_COLUMNS)?;
        let query = format!(
            "SELECT {COLUMNS} FROM beers
             WHERE deleted = FALSE
             {order_by}
             LIMIT $1 OFFSET $2"
        );
        let content = sqlx::query_as::<_, Beer>(&query)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM beers WHERE deleted = FALSE")
            .fetch_one(pool)
            .await?;
        Ok(Page::new(content, total, page))
    }

    /// List the beers owned by one manufacturer, ordered by the
    /// caller's sort criteria. Excludes soft-deleted rows. Whether the
    /// manufacturer itself exists is the caller's concern.
    pub async fn list_by_manufacturer(
        pool: &PgPool,
        manufacturer_id: DbId,
        sort: &SortSpec,
        page: &PageRequest,
    ) -> Result<Page<Beer>, DbError> {
        let order_by = order_by_clause(sort, SORTABLE_COLUMNS)?;
        let query = format!(
            "SELECT {COLUMNS} FROM beers
             WHERE manufacturer_id = $1 AND deleted = FALSE
             {order_by}
             LIMIT $2 OFFSET $3"
        );
        let content = sqlx::query_as::<_, Beer>(&query)
            .bind(manufacturer_id)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM beers WHERE manufacturer_id = $1 AND deleted = FALSE",
        )
        .bind(manufacturer_id)
        .fetch_one(pool)
        .await?;
        Ok(Page::new(content, total, page))
    }

    /// Update a beer. Only non-`None` fields in `input` are applied;
    /// `manufacturer_id` is never written (the relationship is fixed at
    /// creation and checked upstream).
    ///
    /// Returns `None` if no visible row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBeer,
    ) -> Result<Option<Beer>, sqlx::Error> {
        let query = format!(
            "UPDATE beers SET
                name = COALESCE($2, name),
                graduation = COALESCE($3, graduation),
                \"type\" = COALESCE($4, \"type\"),
                description = COALESCE($5, description),
                updated_at = NOW()
             WHERE id = $1 AND deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Beer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.graduation)
            .bind(&input.beer_type)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a beer by ID. Returns `true` if a row was marked
    /// deleted; already-deleted and unknown ids both return `false`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE beers SET deleted = TRUE, updated_at = NOW()
             WHERE id = $1 AND deleted = FALSE",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
