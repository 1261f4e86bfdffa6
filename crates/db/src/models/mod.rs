//! Entity models and their create/update DTOs.

pub mod beer;
pub mod manufacturer;
