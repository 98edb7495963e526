//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes for the `/movies` resource.
///
/// ```text
/// GET    /movies/              -> list_movies
/// GET    /movies/{movie_id}/   -> get_movie
/// ```
///
/// Paths are spelled in full and merged (rather than nested under
/// `/movies`) so the list endpoint keeps its trailing slash: under
/// axum 0.8, nesting at `/movies` with an inner `/` route serves the
/// collection at `/movies` without the trailing slash the API requires.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies/", get(movies::list_movies))
        .route("/movies/{movie_id}/", get(movies::get_movie))
}
