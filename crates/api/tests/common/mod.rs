#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use shipdeck_api::config::ServerConfig;
use shipdeck_api::routes;
use shipdeck_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        database_url: String::new(),
        database_max_connections: 5,
    }
}

/// Build the application router over the given pool, with the same route
/// tree and the core middleware `main.rs` installs.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState::new(pool, test_config());

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST with a form-urlencoded body built from `pairs`.
pub async fn post_form(app: Router, uri: &str, pairs: &[(&str, &str)]) -> Response<Body> {
    let body = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Form fields for a valid project named `name` in `space_id`.
pub fn project_fields(name: &str, space_id: &str) -> Vec<(String, String)> {
    [
        ("space_id", space_id.to_string()),
        ("name", name.to_string()),
        ("repo_url", format!("git@example.com:team/{name}.git")),
        ("online_cluster", "1".to_string()),
        ("online_cluster", "2".to_string()),
        ("deploy_user", "deploy".to_string()),
        ("deploy_path", format!("/srv/{name}")),
        ("deploy_timeout", "300".to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// Borrow owned pairs for [`post_form`].
pub fn as_pairs(fields: &[(String, String)]) -> Vec<(&str, &str)> {
    fields.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

/// Create a project through the API and return its id.
pub async fn create_project(pool: &PgPool, name: &str, space_id: &str) -> i64 {
    let fields = project_fields(name, space_id);
    let response = post_form(
        build_test_app(pool.clone()),
        "/api/v1/projects/add",
        &as_pairs(&fields),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
