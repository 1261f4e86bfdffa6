//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every read path carries
//! an explicit `deleted = FALSE` predicate; soft-deleted rows are
//! invisible to all of them.

pub mod beer_repo;
pub mod manufacturer_repo;

pub use beer_repo::BeerRepo;
pub use manufacturer_repo::ManufacturerRepo;
