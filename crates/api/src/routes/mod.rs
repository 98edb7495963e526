pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies/                paginated listing
/// /movies/{movie_id}/     single movie
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movies::router())
}
