//! Project row models.

use shipdeck_core::project::{ProjectRecord, ProjectSummary};
use shipdeck_core::types::{DbId, StatusId, Timestamp};
use sqlx::FromRow;

/// A full row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub space_id: DbId,
    pub name: String,
    pub description: String,
    pub need_audit: bool,
    pub repo_url: String,
    pub repo_branch: String,
    pub pre_release_cluster: DbId,
    pub online_cluster: Vec<DbId>,
    pub deploy_user: String,
    pub deploy_path: String,
    pub pre_deploy_cmd: String,
    pub after_deploy_cmd: String,
    pub deploy_timeout: i32,
    pub status: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProjectRow> for ProjectRecord {
    fn from(row: ProjectRow) -> Self {
        ProjectRecord {
            id: row.id,
            space_id: row.space_id,
            name: row.name,
            description: row.description,
            need_audit: row.need_audit,
            repo_url: row.repo_url,
            repo_branch: row.repo_branch,
            pre_release_cluster: row.pre_release_cluster,
            online_cluster: row.online_cluster,
            deploy_user: row.deploy_user,
            deploy_path: row.deploy_path,
            pre_deploy_cmd: row.pre_deploy_cmd,
            after_deploy_cmd: row.after_deploy_cmd,
            deploy_timeout: row.deploy_timeout,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// The listing projection: only the columns the public view exposes.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectSummaryRow {
    pub id: DbId,
    pub name: String,
    pub need_audit: bool,
    pub status: StatusId,
}

impl From<ProjectSummaryRow> for ProjectSummary {
    fn from(row: ProjectSummaryRow) -> Self {
        ProjectSummary {
            id: row.id,
            name: row.name,
            need_audit: row.need_audit,
            status: row.status,
        }
    }
}
