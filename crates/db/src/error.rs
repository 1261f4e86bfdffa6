use catalogue_core::error::CoreError;

/// Error returned by repository methods that perform their own domain
/// validation in addition to SQL, currently the listing paths, which
/// check sort criteria against the entity's sortable columns before any
/// query is built.
///
/// Plain CRUD methods return `sqlx::Error` directly.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
