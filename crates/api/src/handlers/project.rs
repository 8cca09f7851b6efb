//! Handlers for the `/projects` resource.
//!
//! Each handler decodes the flat form body or query string into
//! [`RawParams`] and lets the registry do all coercion and validation.

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Query, State};
use axum::Json;
use shipdeck_core::params::RawParams;
use shipdeck_core::project::{ListForm, ProjectForm, ProjectPage, ProjectRecord};

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, SavedId};
use crate::state::AppState;

type Pairs = Vec<(String, String)>;

fn form_params(form: Result<Form<Pairs>, FormRejection>) -> AppResult<RawParams> {
    let Form(pairs) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(RawParams::new(pairs))
}

fn query_params(query: Result<Query<Pairs>, QueryRejection>) -> AppResult<RawParams> {
    let Query(pairs) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(RawParams::new(pairs))
}

/// GET /api/v1/projects?space_id=&keyword=&offset=&limit=
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<Pairs>, QueryRejection>,
) -> AppResult<Json<DataResponse<ProjectPage>>> {
    let form = ListForm::from_params(&query_params(query)?);
    let page = state.projects.list_page(form).await?;
    tracing::debug!(count = page.list.len(), total = page.total, "Listed projects");
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/projects/detail?id=
pub async fn detail(
    State(state): State<AppState>,
    query: Result<Query<Pairs>, QueryRejection>,
) -> AppResult<Json<DataResponse<ProjectRecord>>> {
    let id = query_params(query)?.int("id");
    let project = state.projects.detail(id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/projects/add
///
/// Creates a project, or overwrites one when the form carries an `id`.
pub async fn add(
    State(state): State<AppState>,
    form: Result<Form<Pairs>, FormRejection>,
) -> AppResult<Json<DataResponse<SavedId>>> {
    let form = ProjectForm::from_params(&form_params(form)?);
    let created = form.id == 0;
    let id = state.projects.create_or_update(form).await?;
    if created {
        tracing::info!(id, "Project created");
    } else {
        tracing::info!(id, "Project updated");
    }
    Ok(Json(DataResponse { data: SavedId { id } }))
}

/// POST /api/v1/projects/update
pub async fn update(
    State(state): State<AppState>,
    form: Result<Form<Pairs>, FormRejection>,
) -> AppResult<Json<DataResponse<SavedId>>> {
    let form = ProjectForm::from_params(&form_params(form)?);
    let id = state.projects.update(form).await?;
    tracing::info!(id, "Project updated");
    Ok(Json(DataResponse { data: SavedId { id } }))
}

/// POST /api/v1/projects/delete
pub async fn delete(
    State(state): State<AppState>,
    form: Result<Form<Pairs>, FormRejection>,
) -> AppResult<Json<DataResponse<()>>> {
    let id = form_params(form)?.int("id");
    state.projects.delete(id).await?;
    tracing::info!(id, "Project deleted");
    Ok(Json(DataResponse::ack()))
}

/// POST /api/v1/projects/status
///
/// Any nonzero `status` enables the project; zero or absent disables it.
pub async fn switch_status(
    State(state): State<AppState>,
    form: Result<Form<Pairs>, FormRejection>,
) -> AppResult<Json<DataResponse<()>>> {
    let params = form_params(form)?;
    let id = params.int("id");
    let status = state.projects.switch_status(id, params.int("status")).await?;
    tracing::info!(id, status = status.id(), "Project status switched");
    Ok(Json(DataResponse::ack()))
}
