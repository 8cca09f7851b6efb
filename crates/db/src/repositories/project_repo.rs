//! Repository for the `projects` table.

use shipdeck_core::project::{ProjectDraft, ProjectFilter};
use shipdeck_core::search::contains_pattern;
use shipdeck_core::types::{DbId, StatusId};
use sqlx::{PgExecutor, PgPool};

use crate::models::project::{ProjectRow, ProjectSummaryRow};

/// Column list shared across full-row queries.
const COLUMNS: &str = "id, space_id, name, description, need_audit, repo_url, repo_branch, \
     pre_release_cluster, online_cluster, deploy_user, deploy_path, pre_deploy_cmd, \
     after_deploy_cmd, deploy_timeout, status, created_at, updated_at";

/// Columns of the public listing view.
const SUMMARY_COLUMNS: &str = "id, name, need_audit, status";

/// Listing predicate. `$2` is NULL when no keyword filter applies.
const FILTER: &str = "space_id = $1 AND ($2::TEXT IS NULL OR name ILIKE $2)";

/// Provides CRUD and listing operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project and return its id. `input.id` is ignored.
    ///
    /// New projects start disabled (`status = 0`).
    pub async fn create(pool: &PgPool, input: &ProjectDraft) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO projects (space_id, name, description, need_audit, repo_url,
                repo_branch, pre_release_cluster, online_cluster, deploy_user, deploy_path,
                pre_deploy_cmd, after_deploy_cmd, deploy_timeout)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING id",
        )
        .bind(input.space_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.need_audit)
        .bind(&input.repo_url)
        .bind(&input.repo_branch)
        .bind(input.pre_release_cluster)
        .bind(&input.online_cluster)
        .bind(&input.deploy_user)
        .bind(&input.deploy_path)
        .bind(&input.pre_deploy_cmd)
        .bind(&input.after_deploy_cmd)
        .bind(input.deploy_timeout)
        .fetch_one(pool)
        .await
    }

    /// Overwrite every configurable column of project `input.id`.
    ///
    /// `status` is left alone. Returns `false` if no row with that id exists.
    pub async fn replace(pool: &PgPool, input: &ProjectDraft) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET
                space_id = $2,
                name = $3,
                description = $4,
                need_audit = $5,
                repo_url = $6,
                repo_branch = $7,
                pre_release_cluster = $8,
                online_cluster = $9,
                deploy_user = $10,
                deploy_path = $11,
                pre_deploy_cmd = $12,
                after_deploy_cmd = $13,
                deploy_timeout = $14
             WHERE id = $1",
        )
        .bind(input.id)
        .bind(input.space_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.need_audit)
        .bind(&input.repo_url)
        .bind(&input.repo_branch)
        .bind(input.pre_release_cluster)
        .bind(&input.online_cluster)
        .bind(&input.deploy_user)
        .bind(&input.deploy_path)
        .bind(&input.pre_deploy_cmd)
        .bind(&input.after_deploy_cmd)
        .bind(input.deploy_timeout)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a project by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the status column only. Returns `true` if a row was updated.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: StatusId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE projects SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List matching projects, newest first.
    pub async fn list<'e, E: PgExecutor<'e>>(
        executor: E,
        filter: &ProjectFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ProjectSummaryRow>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM projects
             WHERE {FILTER}
             ORDER BY id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, ProjectSummaryRow>(&query)
            .bind(filter.space_id)
            .bind(keyword_pattern(filter))
            .bind(limit)
            .bind(offset)
            .fetch_all(executor)
            .await
    }

    /// Count projects matching `filter`.
    pub async fn count<'e, E: PgExecutor<'e>>(
        executor: E,
        filter: &ProjectFilter,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM projects WHERE {FILTER}");
        sqlx::query_scalar(&query)
            .bind(filter.space_id)
            .bind(keyword_pattern(filter))
            .fetch_one(executor)
            .await
    }

    /// List a page and count the total inside one read-only
    /// `REPEATABLE READ` transaction, so both see the same snapshot.
    pub async fn list_page(
        pool: &PgPool,
        filter: &ProjectFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ProjectSummaryRow>, i64), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;
        let rows = Self::list(&mut *tx, filter, offset, limit).await?;
        let total = Self::count(&mut *tx, filter).await?;
        tx.commit().await?;
        Ok((rows, total))
    }
}

/// `ILIKE` pattern for the filter's keyword, or `None` for no name filter.
fn keyword_pattern(filter: &ProjectFilter) -> Option<String> {
    filter
        .has_keyword()
        .then(|| contains_pattern(&filter.keyword))
}
