//! Query-parameter extraction for listing endpoints.
//!
//! The `sort` parameter may be repeated (`?sort=name&sort=asc`), and
//! `serde_urlencoded` cannot collect repeated keys through a derived
//! struct, so listing handlers extract the raw key/value pairs with
//! `Query<Vec<(String, String)>>` and group them here.

use catalogue_core::error::CoreError;
use catalogue_core::page::PageRequest;
use catalogue_core::sort::{parse_sort_tokens, SortSpec};

use crate::error::AppError;

/// Listing parameters: repeated `sort` tokens plus `page`/`size`.
#[derive(Debug, Default)]
pub struct ListParams {
    pub sort: Vec<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl ListParams {
    /// Group raw query pairs, preserving the order of `sort` values.
    /// Unknown keys are ignored; non-numeric `page`/`size` values are
    /// rejected.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, AppError> {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "sort" => params.sort.push(value),
                "page" => params.page = Some(parse_int("page", &value)?),
                "size" => params.size = Some(parse_int("size", &value)?),
                _ => {}
            }
        }
        Ok(params)
    }

    /// The sort specification: parsed from the supplied tokens, or the
    /// default `id desc` order when none were supplied.
    pub fn sort_spec(&self) -> Result<SortSpec, CoreError> {
        if self.sort.is_empty() {
            Ok(SortSpec::default_order())
        } else {
            parse_sort_tokens(&self.sort)
        }
    }

    /// The page request, with defaults applied.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_params(self.page, self.size)
    }
}

fn parse_int(name: &str, value: &str) -> Result<i64, AppError> {
    value
        .parse()
        .map_err(|_| AppError::BadRequest(format!("'{name}' must be an integer, got '{value}'")))
}
