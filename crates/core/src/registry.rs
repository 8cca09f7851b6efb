//! Project-record lifecycle operations.
//!
//! [`ProjectRegistry`] validates input, then delegates to its
//! [`ProjectStore`]. Validation failures are returned before the store is
//! called; store failures (including missing records) surface as
//! application errors.

use crate::error::CoreError;
use crate::params::require_id;
use crate::project::{
    ListForm, ProjectFilter, ProjectForm, ProjectPage, ProjectRecord, ProjectStatus,
    ProjectSummary,
};
use crate::store::ProjectStore;
use crate::types::DbId;

const ENTITY: &str = "Project";

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: ENTITY, id }
}

#[derive(Debug, Clone)]
pub struct ProjectRegistry<S> {
    store: S,
}

impl<S: ProjectStore> ProjectRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // -- repository ----------------------------------------------------------

    /// Create the project when `form.id == 0`, otherwise overwrite the
    /// existing record wholesale. Returns the record's id.
    ///
    /// An update aimed at an id that does not exist fails with
    /// [`CoreError::NotFound`]; it never inserts under that id.
    pub async fn create_or_update(&self, form: ProjectForm) -> Result<DbId, CoreError> {
        let draft = form.validate()?;
        if draft.is_new() {
            return self.store.insert(&draft).await;
        }
        if self.store.replace(&draft).await? {
            Ok(draft.id)
        } else {
            Err(not_found(draft.id))
        }
    }

    /// Update entry point: the id must be present before anything else is
    /// checked.
    pub async fn update(&self, form: ProjectForm) -> Result<DbId, CoreError> {
        require_id(form.id)?;
        self.create_or_update(form).await
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let id = require_id(id)?;
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    pub async fn detail(&self, id: DbId) -> Result<ProjectRecord, CoreError> {
        let id = require_id(id)?;
        self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn update_status(&self, id: DbId, status: ProjectStatus) -> Result<(), CoreError> {
        let id = require_id(id)?;
        if self.store.update_status(id, status.id()).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    // -- status toggle -------------------------------------------------------

    /// Normalize `raw_status` to enabled/disabled and apply it.
    pub async fn switch_status(&self, id: DbId, raw_status: i64) -> Result<ProjectStatus, CoreError> {
        let status = ProjectStatus::from_raw(raw_status);
        self.update_status(id, status).await?;
        Ok(status)
    }

    // -- queries -------------------------------------------------------------

    pub async fn list(&self, form: ListForm) -> Result<Vec<ProjectSummary>, CoreError> {
        let query = form.validate()?;
        self.store
            .list(&query.filter, query.offset, query.limit)
            .await
    }

    pub async fn total(&self, keyword: &str, space_id: DbId) -> Result<i64, CoreError> {
        let filter = ProjectFilter::new(keyword, space_id)?;
        self.store.count(&filter).await
    }

    /// A listing page and its total, read from one snapshot.
    pub async fn list_page(&self, form: ListForm) -> Result<ProjectPage, CoreError> {
        let query = form.validate()?;
        self.store
            .page(&query.filter, query.offset, query.limit)
            .await
    }
}
