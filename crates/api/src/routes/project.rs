//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /           -> list (space_id, limit, keyword, offset)
/// GET    /detail     -> detail (id)
/// POST   /add        -> add (create, or update when id is set)
/// POST   /update     -> update (id required)
/// POST   /delete     -> delete (id)
/// POST   /status     -> switch_status (id, status)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/detail", get(project::detail))
        .route("/add", post(project::add))
        .route("/update", post(project::update))
        .route("/delete", post(project::delete))
        .route("/status", post(project::switch_status))
}
