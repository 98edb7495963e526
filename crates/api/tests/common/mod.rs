//! Shared helpers for API integration tests.
//!
//! Tests drive the real router via `tower::ServiceExt::oneshot`, so the
//! full middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) is exercised without a TCP listener.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cinedex_api::config::ServerConfig;
use cinedex_api::router::build_app_router;
use cinedex_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body is not valid JSON")
}

/// Insert `n` movies with predictable titles ("Movie 1" .. "Movie n").
#[allow(dead_code)]
pub async fn seed_movies(pool: &PgPool, n: i64) {
    for i in 1..=n {
        sqlx::query(
            "INSERT INTO movies
                (name, date, score, genre, overview, crew, orig_title, status,
                 orig_lang, budget, revenue, country)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(format!("Movie {i}"))
        .bind(chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        .bind(7.5)
        .bind("Drama")
        .bind(format!("Overview for movie {i}"))
        .bind("Director A, Actor B")
        .bind(format!("Movie {i}"))
        .bind("Released")
        .bind("en")
        .bind(1_000_000.0)
        .bind(5_000_000.0)
        .bind("US")
        .execute(pool)
        .await
        .expect("Failed to seed movie");
    }
}
