//! Integration tests for the `projects` repository and the Postgres store.
//!
//! Exercises SQL behaviour against a real database:
//! - Insert / wholesale replace / hard delete
//! - Status-only updates
//! - Keyword filtering, ordering, and pagination with matching totals
//! - Registry operations end to end through `PgProjectStore`

use assert_matches::assert_matches;
use shipdeck_core::error::CoreError;
use shipdeck_core::project::{ListForm, ProjectDraft, ProjectFilter, ProjectForm};
use shipdeck_core::registry::ProjectRegistry;
use shipdeck_db::repositories::ProjectRepo;
use shipdeck_db::PgProjectStore;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_draft(name: &str, space_id: i64) -> ProjectDraft {
    ProjectDraft {
        id: 0,
        space_id,
        name: name.to_string(),
        description: String::new(),
        need_audit: false,
        repo_url: format!("git@example.com:team/{name}.git"),
        repo_branch: "main".to_string(),
        pre_release_cluster: 0,
        online_cluster: vec![1, 2],
        deploy_user: "deploy".to_string(),
        deploy_path: format!("/srv/{name}"),
        pre_deploy_cmd: String::new(),
        after_deploy_cmd: String::new(),
        deploy_timeout: 300,
    }
}

fn new_form(name: &str, space_id: i64) -> ProjectForm {
    ProjectForm {
        space_id,
        name: name.to_string(),
        repo_url: format!("git@example.com:team/{name}.git"),
        online_cluster: vec![2, 0, 2, 1],
        deploy_user: "deploy".to_string(),
        deploy_path: format!("/srv/{name}"),
        deploy_timeout: 60,
        ..Default::default()
    }
}

fn filter(keyword: &str, space_id: i64) -> ProjectFilter {
    ProjectFilter::new(keyword, space_id).unwrap()
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find(pool: PgPool) {
    let id = ProjectRepo::create(&pool, &new_draft("alpha-svc", 5))
        .await
        .unwrap();
    assert!(id > 0);

    let row = ProjectRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(row.name, "alpha-svc");
    assert_eq!(row.online_cluster, vec![1, 2]);
    assert_eq!(row.status, 0);
    assert_eq!(row.deploy_timeout, 300);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_replace_overwrites_every_field(pool: PgPool) {
    let id = ProjectRepo::create(&pool, &new_draft("alpha-svc", 5))
        .await
        .unwrap();
    ProjectRepo::update_status(&pool, id, 1).await.unwrap();

    let mut changed = new_draft("alpha-api", 6);
    changed.id = id;
    changed.repo_branch = String::new();
    changed.online_cluster = vec![7];
    changed.need_audit = true;
    assert!(ProjectRepo::replace(&pool, &changed).await.unwrap());

    let row = ProjectRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(row.name, "alpha-api");
    assert_eq!(row.space_id, 6);
    assert_eq!(row.repo_branch, "");
    assert_eq!(row.online_cluster, vec![7]);
    assert!(row.need_audit);
    assert_eq!(row.status, 1, "replace must not touch status");
    assert!(row.updated_at >= row.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_replace_missing_row_returns_false(pool: PgPool) {
    let mut ghost = new_draft("ghost", 5);
    ghost.id = 999_999;
    assert!(!ProjectRepo::replace(&pool, &ghost).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete(pool: PgPool) {
    let id = ProjectRepo::create(&pool, &new_draft("alpha-svc", 5))
        .await
        .unwrap();
    assert!(ProjectRepo::delete(&pool, id).await.unwrap());
    assert!(!ProjectRepo::delete(&pool, id).await.unwrap());
    assert!(ProjectRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_empty_cluster_set_violates_check(pool: PgPool) {
    let mut draft = new_draft("alpha-svc", 5);
    draft.online_cluster.clear();
    let result = ProjectRepo::create(&pool, &draft).await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filters_by_space_and_keyword(pool: PgPool) {
    let alpha = ProjectRepo::create(&pool, &new_draft("alpha-svc", 5))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_draft("beta-svc", 5))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_draft("alpha-svc", 6))
        .await
        .unwrap();

    let rows = ProjectRepo::list(&pool, &filter("alpha", 5), 0, 10)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, alpha);
    assert_eq!(ProjectRepo::count(&pool, &filter("alpha", 5)).await.unwrap(), 1);

    // Case-insensitive substring match.
    let rows = ProjectRepo::list(&pool, &filter("SVC", 5), 0, 10)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);

    // No keyword lists the whole space, newest first.
    let rows = ProjectRepo::list(&pool, &filter("", 5), 0, 10).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "beta-svc");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_keyword_wildcards_match_literally(pool: PgPool) {
    ProjectRepo::create(&pool, &new_draft("promo_50%", 5))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_draft("promoX50Y", 5))
        .await
        .unwrap();

    assert_eq!(ProjectRepo::count(&pool, &filter("_50%", 5)).await.unwrap(), 1);
    assert_eq!(ProjectRepo::count(&pool, &filter("promo", 5)).await.unwrap(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_page_slices_and_counts(pool: PgPool) {
    for i in 0..5 {
        ProjectRepo::create(&pool, &new_draft(&format!("svc-{i}"), 5))
            .await
            .unwrap();
    }

    let (rows, total) = ProjectRepo::list_page(&pool, &filter("svc", 5), 3, 10)
        .await
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "svc-1");
    assert_eq!(rows[1].name, "svc-0");

    let (rows, total) = ProjectRepo::list_page(&pool, &filter("svc", 5), 10, 10)
        .await
        .unwrap();
    assert!(rows.is_empty());
    assert_eq!(total, 5);
}

// ---------------------------------------------------------------------------
// Registry over Postgres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_registry_upsert_lifecycle(pool: PgPool) {
    let registry = ProjectRegistry::new(PgProjectStore::new(pool));

    let id = registry
        .create_or_update(new_form("alpha-svc", 5))
        .await
        .unwrap();
    let record = registry.detail(id).await.unwrap();
    assert_eq!(record.online_cluster, vec![1, 2]);

    let mut update = new_form("alpha-svc", 5);
    update.id = id;
    update.deploy_timeout = 900;
    assert_eq!(registry.update(update).await.unwrap(), id);
    assert_eq!(registry.detail(id).await.unwrap().deploy_timeout, 900);

    registry.switch_status(id, 3).await.unwrap();
    assert_eq!(registry.detail(id).await.unwrap().status, 1);

    registry.delete(id).await.unwrap();
    assert_matches!(registry.detail(id).await, Err(CoreError::NotFound { .. }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_registry_update_of_missing_id_is_not_found(pool: PgPool) {
    let registry = ProjectRegistry::new(PgProjectStore::new(pool.clone()));
    let mut ghost = new_form("ghost", 5);
    ghost.id = 4242;

    assert_matches!(
        registry.create_or_update(ghost).await,
        Err(CoreError::NotFound { id: 4242, .. })
    );
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_registry_list_page_and_total_agree(pool: PgPool) {
    let registry = ProjectRegistry::new(PgProjectStore::new(pool));
    registry
        .create_or_update(new_form("alpha-svc", 5))
        .await
        .unwrap();
    registry
        .create_or_update(new_form("beta-svc", 5))
        .await
        .unwrap();

    let page = registry
        .list_page(ListForm {
            keyword: "alpha".into(),
            space_id: 5,
            offset: 0,
            limit: 10,
        })
        .await
        .unwrap();
    assert_eq!(page.list.len(), 1);
    assert_eq!(page.list[0].name, "alpha-svc");
    assert_eq!(page.total, 1);
    assert_eq!(registry.total("alpha", 5).await.unwrap(), 1);
}
