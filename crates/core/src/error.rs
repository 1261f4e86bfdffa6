use crate::types::DbId;

/// Fixed message for [`CoreError::MalformedSortFormat`]. Describes the
/// two accepted shapes of the `sort` query parameter.
pub const MALFORMED_SORT_FORMAT_MESSAGE: &str = "The format of the sort criteria provided is not valid. \
     The format is: {sort=\"field1, direction1\", sort=\"field2, direction2\"...} or {sort=field, sort=direction}.";

/// Domain-level error taxonomy.
///
/// Every variant is a client-addressable failure: deterministic, terminal
/// for the current operation, and carrying a message fit for direct
/// surfacing. The HTTP layer maps variants to status codes; this crate
/// never produces a server-fault category itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The raw sort tokens failed a structural check (arity, empty
    /// field, unrecognised direction literal).
    #[error("{}", MALFORMED_SORT_FORMAT_MESSAGE)]
    MalformedSortFormat,

    /// A well-formed sort key names a field the entity cannot be sorted
    /// by.
    #[error("Invalid sort criteria: '{field}' is not a sortable field")]
    InvalidSortCriteria { field: String },

    /// The addressed entity does not exist or is soft-deleted.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A scoped operation references a parent entity that does not
    /// exist or is soft-deleted.
    #[error("Parent not found: {entity} with id {id}")]
    ParentNotFound { entity: &'static str, id: DbId },

    /// A create operation supplied an id; identities are assigned by
    /// the store.
    #[error("The id of a new {entity} must not be provided; it is assigned on creation")]
    IdentityAlreadyAssigned { entity: &'static str },

    /// An update attempted to change a relationship that is fixed at
    /// creation time.
    #[error("The {relation} of an existing {entity} cannot be changed")]
    ImmutableRelationship {
        entity: &'static str,
        relation: &'static str,
    },
}
