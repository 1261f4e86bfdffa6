//! ORDER BY rendering for validated sort criteria.

use catalogue_core::error::CoreError;
use catalogue_core::sort::SortSpec;

/// Render `spec` as an `ORDER BY` clause, validating every field
/// against `allowed`, the entity's sortable columns.
///
/// Field names are matched exactly (case-sensitive); an unknown field
/// fails with [`CoreError::InvalidSortCriteria`] before any SQL is
/// assembled. Column names are double-quoted so reserved-ish words like
/// `type` stay valid.
pub(crate) fn order_by_clause(spec: &SortSpec, allowed: &[&str]) -> Result<String, CoreError> {
    let mut rendered = Vec::with_capacity(spec.keys().len());
    for key in spec.keys() {
        if !allowed.contains(&key.field.as_str()) {
            return Err(CoreError::InvalidSortCriteria {
                field: key.field.clone(),
            });
        }
        rendered.push(format!("\"{}\" {}", key.field, key.direction.as_sql()));
    }
    Ok(format!("ORDER BY {}", rendered.join(", ")))
}
