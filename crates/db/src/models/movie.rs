//! Movie entity model.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use cinedex_core::types::DbId;

/// A movie row from the `movies` table.
///
/// The API serializes this struct directly, so field names here are the
/// wire names.
#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub name: String,
    pub date: NaiveDate,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    pub budget: f64,
    pub revenue: f64,
    pub country: String,
}

// Mapped column-by-column so a schema drift fails loudly on the offending
// column instead of silently reshuffling fields.
impl FromRow<'_, PgRow> for Movie {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            date: row.try_get("date")?,
            score: row.try_get("score")?,
            genre: row.try_get("genre")?,
            overview: row.try_get("overview")?,
            crew: row.try_get("crew")?,
            orig_title: row.try_get("orig_title")?,
            status: row.try_get("status")?,
            orig_lang: row.try_get("orig_lang")?,
            budget: row.try_get("budget")?,
            revenue: row.try_get("revenue")?,
            country: row.try_get("country")?,
        })
    }
}
