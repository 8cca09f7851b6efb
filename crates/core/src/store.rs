//! Persistence contract for project records.
//!
//! The registry never touches a database directly; it talks to a
//! [`ProjectStore`]. Implementations must make each single-record write
//! atomic (so concurrent writes to one id serialize) and must allocate
//! identifiers atomically on insert.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::project::{ProjectDraft, ProjectFilter, ProjectPage, ProjectRecord, ProjectSummary};
use crate::types::{DbId, StatusId};

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Insert a new record and return its assigned id. `draft.id` is ignored.
    async fn insert(&self, draft: &ProjectDraft) -> Result<DbId, CoreError>;

    /// Overwrite every field of the record `draft.id`.
    ///
    /// Returns `false` if no such record exists.
    async fn replace(&self, draft: &ProjectDraft) -> Result<bool, CoreError>;

    /// Fetch a record by id.
    async fn find_by_id(&self, id: DbId) -> Result<Option<ProjectRecord>, CoreError>;

    /// Remove a record. Returns `false` if no such record exists.
    async fn delete(&self, id: DbId) -> Result<bool, CoreError>;

    /// Set only the status column. Returns `false` if no such record exists.
    async fn update_status(&self, id: DbId, status: StatusId) -> Result<bool, CoreError>;

    /// Matching summaries ordered newest first, sliced by `offset`/`limit`.
    async fn list(
        &self,
        filter: &ProjectFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ProjectSummary>, CoreError>;

    /// Number of records matching `filter`, ignoring pagination.
    async fn count(&self, filter: &ProjectFilter) -> Result<i64, CoreError>;

    /// A page and its total read from one consistent snapshot.
    async fn page(
        &self,
        filter: &ProjectFilter,
        offset: i64,
        limit: i64,
    ) -> Result<ProjectPage, CoreError>;
}
