//! [`ProjectStore`] backed by PostgreSQL.

use async_trait::async_trait;
use shipdeck_core::error::CoreError;
use shipdeck_core::project::{
    ProjectDraft, ProjectFilter, ProjectPage, ProjectRecord, ProjectSummary,
};
use shipdeck_core::store::ProjectStore;
use shipdeck_core::types::{DbId, StatusId};

use crate::repositories::ProjectRepo;
use crate::DbPool;

/// PostgreSQL unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Delegates every operation to [`ProjectRepo`] and maps driver errors into
/// [`CoreError`]. Cheap to clone: the pool is reference-counted.
#[derive(Debug, Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Classify a sqlx error as an application-level [`CoreError`].
///
/// Unique violations become [`CoreError::Conflict`]; everything else is a
/// [`CoreError::Storage`] carrying the driver's message.
pub fn map_db_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("unknown");
            return CoreError::Conflict(format!(
                "Duplicate value violates unique constraint: {constraint}"
            ));
        }
    }
    tracing::error!(error = %err, "Project store error");
    CoreError::Storage(err.to_string())
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn insert(&self, draft: &ProjectDraft) -> Result<DbId, CoreError> {
        ProjectRepo::create(&self.pool, draft)
            .await
            .map_err(map_db_error)
    }

    async fn replace(&self, draft: &ProjectDraft) -> Result<bool, CoreError> {
        ProjectRepo::replace(&self.pool, draft)
            .await
            .map_err(map_db_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<ProjectRecord>, CoreError> {
        let row = ProjectRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_db_error)?;
        Ok(row.map(ProjectRecord::from))
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        ProjectRepo::delete(&self.pool, id)
            .await
            .map_err(map_db_error)
    }

    async fn update_status(&self, id: DbId, status: StatusId) -> Result<bool, CoreError> {
        ProjectRepo::update_status(&self.pool, id, status)
            .await
            .map_err(map_db_error)
    }

    async fn list(
        &self,
        filter: &ProjectFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ProjectSummary>, CoreError> {
        let rows = ProjectRepo::list(&self.pool, filter, offset, limit)
            .await
            .map_err(map_db_error)?;
        Ok(rows.into_iter().map(ProjectSummary::from).collect())
    }

    async fn count(&self, filter: &ProjectFilter) -> Result<i64, CoreError> {
        ProjectRepo::count(&self.pool, filter)
            .await
            .map_err(map_db_error)
    }

    async fn page(
        &self,
        filter: &ProjectFilter,
        offset: i64,
        limit: i64,
    ) -> Result<ProjectPage, CoreError> {
        let (rows, total) = ProjectRepo::list_page(&self.pool, filter, offset, limit)
            .await
            .map_err(map_db_error)?;
        tracing::debug!(
            space_id = filter.space_id,
            returned = rows.len(),
            total,
            "Listed projects"
        );
        Ok(ProjectPage {
            list: rows.into_iter().map(ProjectSummary::from).collect(),
            total,
        })
    }
}
