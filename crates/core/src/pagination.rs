//! Page-based pagination arithmetic and parameter validation.
//!
//! The list endpoint exposes classic `?page=&per_page=` pagination. This
//! module owns the bounds on both parameters, the offset / total-pages
//! arithmetic, and nothing else — fetching the rows is the repository's
//! job.

use crate::error::{CoreError, ParamViolation};

/* --------------------------------------------------------------------------
   Limits and defaults
   -------------------------------------------------------------------------- */

/// Page number used when the client does not supply one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client does not supply one.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Smallest allowed page size.
pub const MIN_PER_PAGE: i64 = 1;

/// Largest allowed page size.
pub const MAX_PER_PAGE: i64 = 20;

/// Machine-readable tag for a value below its minimum.
pub const CODE_NOT_GE: &str = "value_error.number.not_ge";

/// Machine-readable tag for a value above its maximum.
pub const CODE_NOT_LE: &str = "value_error.number.not_le";

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a 1-based page number.
pub fn validate_page(page: i64) -> Result<(), CoreError> {
    if page < 1 {
        return Err(CoreError::Validation(ParamViolation {
            location: "query",
            field: "page",
            message: "ensure this value is greater than or equal to 1".to_string(),
            code: CODE_NOT_GE,
        }));
    }
    Ok(())
}

/// Validate a page size against the allowed range.
pub fn validate_per_page(per_page: i64) -> Result<(), CoreError> {
    if per_page < MIN_PER_PAGE {
        return Err(CoreError::Validation(ParamViolation {
            location: "query",
            field: "per_page",
            message: format!("ensure this value is greater than or equal to {MIN_PER_PAGE}"),
            code: CODE_NOT_GE,
        }));
    }
    if per_page > MAX_PER_PAGE {
        return Err(CoreError::Validation(ParamViolation {
            location: "query",
            field: "per_page",
            message: format!("ensure this value is less than or equal to {MAX_PER_PAGE}"),
            code: CODE_NOT_LE,
        }));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Window arithmetic
   -------------------------------------------------------------------------- */

/// Computed window of one page within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Rows to skip before the page begins.
    pub offset: i64,
    /// Total number of pages at this page size.
    pub total_pages: i64,
    /// Whether a page precedes this one.
    pub has_prev: bool,
    /// Whether a page follows this one.
    pub has_next: bool,
}

/// Compute the window for `page` of a collection of `total_items` rows.
///
/// Callers validate `page` and `per_page` first; the arithmetic itself has
/// no failure modes. `total_pages` is `ceil(total_items / per_page)`, zero
/// when the collection is empty.
pub fn compute(page: i64, per_page: i64, total_items: i64) -> PageWindow {
    let offset = (page - 1).saturating_mul(per_page);
    let total_pages = total_items / per_page + i64::from(total_items % per_page > 0);
    PageWindow {
        offset,
        total_pages,
        has_prev: page > 1,
        has_next: page < total_pages,
    }
}
