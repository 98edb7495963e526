//! Handlers for the movie catalog resource.
//!
//! Two read-only endpoints: a paginated listing and a single-movie lookup.
//! Pagination bounds and arithmetic live in `cinedex_core::pagination`;
//! queries live in `MovieRepo`.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use cinedex_core::error::CoreError;
use cinedex_core::pagination;
use cinedex_core::types::DbId;
use cinedex_db::models::movie::Movie;
use cinedex_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// 404 message when the catalog is empty or the requested page is out of range.
const NO_MOVIES_FOUND: &str = "No movies found.";

/// 404 message for a missing movie ID.
const MOVIE_NOT_FOUND: &str = "Movie with the given ID was not found.";

/// Response payload for `GET /movies/`.
#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub total_pages: i64,
    pub total_items: i64,
}

/// Render the navigation reference for an adjacent page.
///
/// Clients treat this as an opaque string; the rendering is fixed so
/// existing consumers can keep following it.
fn page_link(page: i64, per_page: i64) -> String {
    format!("/movies/?page={page}&per_page={per_page}")
}

// ---------------------------------------------------------------------------
// GET /movies/
// ---------------------------------------------------------------------------

/// List movies with page-based pagination.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<MovieListResponse>> {
    let page = params.page.unwrap_or(pagination::DEFAULT_PAGE);
    let per_page = params.per_page.unwrap_or(pagination::DEFAULT_PER_PAGE);

    // page is checked before per_page; the first violation wins.
    pagination::validate_page(page)?;
    pagination::validate_per_page(per_page)?;

    let total_items = MovieRepo::count(&state.pool).await?;
    if total_items == 0 {
        return Err(AppError::Core(CoreError::NotFound(NO_MOVIES_FOUND.into())));
    }

    let window = pagination::compute(page, per_page, total_items);

    // Out-of-range pages 404 before the slice query is issued.
    if window.total_pages < page {
        return Err(AppError::Core(CoreError::NotFound(NO_MOVIES_FOUND.into())));
    }

    let movies = MovieRepo::list_page(&state.pool, per_page, window.offset).await?;
    tracing::debug!(page, per_page, count = movies.len(), "Listed movies");

    Ok(Json(MovieListResponse {
        movies,
        prev_page: window.has_prev.then(|| page_link(page - 1, per_page)),
        next_page: window.has_next.then(|| page_link(page + 1, per_page)),
        total_pages: window.total_pages,
        total_items,
    }))
}

// ---------------------------------------------------------------------------
// GET /movies/{movie_id}/
// ---------------------------------------------------------------------------

/// Get a single movie by ID.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, movie_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound(MOVIE_NOT_FOUND.into())))?;
    Ok(Json(movie))
}
