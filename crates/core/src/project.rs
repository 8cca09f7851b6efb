//! Deployment-project records, input normalization, and listing queries.
//!
//! Raw caller input arrives as a [`ProjectForm`] or [`ListForm`]; the only
//! way to obtain the validated [`ProjectDraft`] / [`ListQuery`] the registry
//! operates on is through their `validate` methods, which report the first
//! failing field as [`CoreError::InvalidParam`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::params::RawParams;
use crate::search::{clamp_offset, is_valid_limit, MAX_LIST_LIMIT, MIN_LIST_LIMIT};
use crate::types::{DbId, StatusId, Timestamp};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Whether a project accepts deploys.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    #[default]
    Disabled = 0,
    Enabled = 1,
}

impl ProjectStatus {
    /// Normalize a submitted status: zero disables, anything else enables.
    pub fn from_raw(raw: i64) -> Self {
        if raw == 0 {
            ProjectStatus::Disabled
        } else {
            ProjectStatus::Enabled
        }
    }

    /// Return the database status value.
    pub fn id(self) -> StatusId {
        self as StatusId
    }
}

impl From<ProjectStatus> for StatusId {
    fn from(value: ProjectStatus) -> Self {
        value as StatusId
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A stored deployment project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
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

impl ProjectRecord {
    pub fn project_status(&self) -> ProjectStatus {
        ProjectStatus::from_raw(i64::from(self.status))
    }

    /// Project this record onto its public listing view.
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id,
            name: self.name.clone(),
            need_audit: self.need_audit,
            status: self.status,
        }
    }
}

/// Public listing view of a project. Repository details, deploy credentials,
/// and commands are never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub name: String,
    pub need_audit: bool,
    pub status: StatusId,
}

/// One page of a listing together with the unpaginated match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPage {
    pub list: Vec<ProjectSummary>,
    pub total: i64,
}

// ---------------------------------------------------------------------------
// Create / update input
// ---------------------------------------------------------------------------

/// Drop non-positive cluster ids and collapse duplicates.
///
/// The result is in ascending order so two submissions naming the same set
/// normalize identically.
pub fn normalize_online_clusters(raw: &[i64]) -> Vec<DbId> {
    raw.iter()
        .copied()
        .filter(|id| *id > 0)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Raw create-or-update input after numeric coercion but before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub id: DbId,
    pub space_id: DbId,
    pub name: String,
    pub description: String,
    pub need_audit: i64,
    pub repo_url: String,
    pub repo_branch: String,
    pub pre_release_cluster: DbId,
    pub online_cluster: Vec<i64>,
    pub deploy_user: String,
    pub deploy_path: String,
    pub pre_deploy_cmd: String,
    pub after_deploy_cmd: String,
    pub deploy_timeout: i64,
}

impl ProjectForm {
    pub fn from_params(params: &RawParams) -> Self {
        Self {
            id: params.int("id"),
            space_id: params.int("space_id"),
            name: params.text("name"),
            description: params.text("description"),
            need_audit: params.int("need_audit"),
            repo_url: params.text("repo_url"),
            repo_branch: params.text("repo_branch"),
            pre_release_cluster: params.int("pre_release_cluster"),
            online_cluster: params.ints("online_cluster"),
            deploy_user: params.text("deploy_user"),
            deploy_path: params.text("deploy_path"),
            pre_deploy_cmd: params.text("pre_deploy_cmd"),
            after_deploy_cmd: params.text("after_deploy_cmd"),
            deploy_timeout: params.int("deploy_timeout"),
        }
    }

    /// Check required fields in declaration order and normalize the rest.
    pub fn validate(self) -> Result<ProjectDraft, CoreError> {
        let name = required_text("name", &self.name)?;
        let repo_url = required_text("repo_url", &self.repo_url)?;

        let online_cluster = normalize_online_clusters(&self.online_cluster);
        if online_cluster.is_empty() {
            return Err(CoreError::missing("online_cluster"));
        }

        let deploy_user = required_text("deploy_user", &self.deploy_user)?;
        let deploy_path = required_text("deploy_path", &self.deploy_path)?;
        let deploy_timeout = validate_deploy_timeout(self.deploy_timeout)?;

        Ok(ProjectDraft {
            id: self.id,
            space_id: self.space_id,
            name,
            description: self.description,
            need_audit: self.need_audit != 0,
            repo_url,
            repo_branch: self.repo_branch,
            pre_release_cluster: self.pre_release_cluster.max(0),
            online_cluster,
            deploy_user,
            deploy_path,
            pre_deploy_cmd: self.pre_deploy_cmd,
            after_deploy_cmd: self.after_deploy_cmd,
            deploy_timeout,
        })
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::missing(field));
    }
    Ok(trimmed.to_string())
}

fn validate_deploy_timeout(raw: i64) -> Result<i32, CoreError> {
    if raw == 0 {
        return Err(CoreError::missing("deploy_timeout"));
    }
    if raw < 0 {
        return Err(CoreError::param("deploy_timeout", "must be greater than 0"));
    }
    i32::try_from(raw).map_err(|_| {
        CoreError::param(
            "deploy_timeout",
            format!("must not exceed {} seconds", i32::MAX),
        )
    })
}

/// A validated project ready to be written.
///
/// `id == 0` means "create"; any other id names the record to overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
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
}

impl ProjectDraft {
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

// ---------------------------------------------------------------------------
// Listing input
// ---------------------------------------------------------------------------

/// The predicate shared by listing and counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    pub space_id: DbId,
    /// Trimmed keyword; empty means no name filter.
    pub keyword: String,
}

impl ProjectFilter {
    pub fn new(keyword: &str, space_id: DbId) -> Result<Self, CoreError> {
        if space_id == 0 {
            return Err(CoreError::missing("space_id"));
        }
        Ok(Self {
            space_id,
            keyword: keyword.trim().to_string(),
        })
    }

    pub fn has_keyword(&self) -> bool {
        !self.keyword.is_empty()
    }
}

/// Raw listing input after numeric coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListForm {
    pub keyword: String,
    pub space_id: DbId,
    pub offset: i64,
    pub limit: i64,
}

impl ListForm {
    pub fn from_params(params: &RawParams) -> Self {
        Self {
            keyword: params.text("keyword"),
            space_id: params.int("space_id"),
            offset: params.int("offset"),
            limit: params.int("limit"),
        }
    }

    pub fn validate(self) -> Result<ListQuery, CoreError> {
        if !is_valid_limit(self.limit) {
            return Err(CoreError::param(
                "limit",
                format!("must be between {MIN_LIST_LIMIT} and {MAX_LIST_LIMIT}"),
            ));
        }
        let filter = ProjectFilter::new(&self.keyword, self.space_id)?;
        Ok(ListQuery {
            filter,
            offset: clamp_offset(self.offset),
            limit: self.limit,
        })
    }
}

/// A validated listing request: `limit` is within bounds and `offset >= 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: ProjectFilter,
    pub offset: i64,
    pub limit: i64,
}
