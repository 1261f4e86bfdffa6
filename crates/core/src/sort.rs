//! Sort-criteria parsing for listing endpoints.
//!
//! Callers supply sort criteria as a repeated `sort` query parameter,
//! which reaches this module as an ordered token array in one of two
//! shapes:
//!
//! - multi-key: every token is one `"field,direction"` pair
//!   (`?sort=name,asc&sort=id,desc`)
//! - single-key: exactly two tokens read positionally as field then
//!   direction (`?sort=name&sort=asc`)
//!
//! The first token decides the mode: if it contains a comma the whole
//! array is read as multi-key, otherwise as single-key. The heuristic
//! is kept as-is because callers depend on it; a single-key field name
//! that itself contained a comma would be misread as multi-key.

use crate::error::CoreError;

/// Direction of one sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction token. Matching is case-insensitive; anything
    /// other than `asc` / `desc` is rejected.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    /// The SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One validated `(field, direction)` sort key. The field is never
/// empty; whether it names a sortable column is decided later, against
/// the entity's whitelist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

/// Ordered sort specification. The first key is the primary sort, the
/// second breaks ties, and so on; key order is the caller's token order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// The keys in precedence order. Never empty.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// The listing order applied when the caller supplies no sort
    /// criteria: descending by id.
    pub fn default_order() -> Self {
        Self {
            keys: vec![SortKey {
                field: "id".to_string(),
                direction: SortDirection::Desc,
            }],
        }
    }
}

/// Parse raw sort tokens into a [`SortSpec`].
///
/// Any structural violation (wrong arity, empty field or direction,
/// unrecognised direction literal) fails the whole parse with
/// [`CoreError::MalformedSortFormat`]; no partial spec is ever
/// returned. Parsing is deterministic: the same tokens always yield the
/// same spec.
pub fn parse_sort_tokens(tokens: &[String]) -> Result<SortSpec, CoreError> {
    let multi_key = tokens.first().is_some_and(|token| token.contains(','));
    let keys = if multi_key {
        tokens
            .iter()
            .map(|token| parse_pair_token(token))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        // Positional [field, direction]; any other arity is malformed.
        match tokens {
            [field, direction] => vec![parse_key(field, direction)?],
            _ => return Err(CoreError::MalformedSortFormat),
        }
    };
    Ok(SortSpec { keys })
}

/// Parse one `"field,direction"` token. All whitespace is stripped
/// before splitting, so `"name, asc"` and `"name,asc"` are equivalent.
/// The split must yield exactly two non-empty parts.
fn parse_pair_token(token: &str) -> Result<SortKey, CoreError> {
    let stripped: String = token.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parts = stripped.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(field), Some(direction), None) => parse_key(field, direction),
        _ => Err(CoreError::MalformedSortFormat),
    }
}

fn parse_key(field: &str, direction: &str) -> Result<SortKey, CoreError> {
    if field.is_empty() {
        return Err(CoreError::MalformedSortFormat);
    }
    let direction = SortDirection::parse(direction).ok_or(CoreError::MalformedSortFormat)?;
    Ok(SortKey {
        field: field.to_string(),
        direction,
    })
}
