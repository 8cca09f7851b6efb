pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                 list
/// /projects/detail          detail
/// /projects/add             create or update
/// /projects/update          update
/// /projects/delete          delete
/// /projects/status          enable / disable
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
