//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?page=&per_page=`).
///
/// Absent values fall back to the defaults in [`cinedex_core::pagination`];
/// range checks happen in the handler before any query is issued.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
