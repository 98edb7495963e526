//! Repository for the `movies` table.

use sqlx::PgPool;

use cinedex_core::types::DbId;

use crate::models::movie::Movie;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, date, score, genre, overview, crew, orig_title, status, \
                       orig_lang, budget, revenue, country";

/// Read-only operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Count all movies.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(id) FROM movies")
            .fetch_one(pool)
            .await
    }

    /// Fetch one page of movies in insertion order.
    ///
    /// `ORDER BY id` stands in for the store's natural order: ids are
    /// BIGSERIAL, so this is insertion order and stable across requests.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Movie>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
