//! Builds a catalog snapshot from the permission repository.

use super::PermissionCatalog;
use crate::error::Result;
use crate::repository::PermissionRepository;
use metrics::counter;

/// Load a snapshot, degrading to [`PermissionCatalog::unavailable`] when
/// storage cannot be read.
///
/// A fresh install has no permission tables yet, so the failure is recorded
/// at debug level and never surfaces to the caller. Every non-admin check
/// against the degraded snapshot denies.
pub async fn load_catalog<R>(repo: &R) -> PermissionCatalog
where
    R: PermissionRepository + ?Sized,
{
    match try_load_catalog(repo).await {
        Ok(catalog) => {
            tracing::info!(
                abilities = catalog.abilities().len(),
                roles = catalog.role_names().len(),
                "Permission catalog loaded"
            );
            catalog
        }
        Err(e) => {
            tracing::debug!(error = %e, "Permission catalog unavailable, no abilities registered");
            counter!("flock_catalog_load_failures_total").increment(1);
            PermissionCatalog::unavailable()
        }
    }
}

/// Load a snapshot, propagating storage errors.
pub async fn try_load_catalog<R>(repo: &R) -> Result<PermissionCatalog>
where
    R: PermissionRepository + ?Sized,
{
    let abilities = repo.list_permission_names().await?;

    let mut grants = Vec::new();
    for name in repo.list_role_names().await? {
        // A role deleted between the two queries simply has no grant.
        if let Some(grant) = repo.find_role_by_name(&name).await? {
            grants.push(grant);
        }
    }

    Ok(PermissionCatalog::new(abilities, grants))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogState;
    use crate::domain::RoleGrant;
    use crate::error::AppError;
    use crate::repository::rbac::MockPermissionRepository;

    #[tokio::test]
    async fn test_load_catalog_success() {
        let mut repo = MockPermissionRepository::new();
        repo.expect_list_permission_names().returning(|| {
            Ok(vec![
                "attendance.create".to_string(),
                "attendance.approve".to_string(),
            ])
        });
        repo.expect_list_role_names()
            .returning(|| Ok(vec!["pastor".to_string(), "usher".to_string()]));
        repo.expect_find_role_by_name()
            .times(2)
            .returning(|name| match name {
                "usher" => Ok(Some(RoleGrant::new("usher", ["attendance.create"]))),
                "pastor" => Ok(Some(RoleGrant::new("pastor", ["attendance.approve"]))),
                _ => Ok(None),
            });

        let catalog = load_catalog(&repo).await;

        assert_eq!(catalog.state(), CatalogState::Loaded);
        assert!(catalog.grants("usher", "attendance.create"));
        assert!(!catalog.grants("usher", "attendance.approve"));
        assert!(catalog.grants("pastor", "attendance.approve"));
    }

    #[tokio::test]
    async fn test_load_catalog_skips_vanished_role() {
        let mut repo = MockPermissionRepository::new();
        repo.expect_list_permission_names()
            .returning(|| Ok(vec!["visitors.view".to_string()]));
        repo.expect_list_role_names()
            .returning(|| Ok(vec!["ghost".to_string()]));
        repo.expect_find_role_by_name().returning(|_| Ok(None));

        let catalog = load_catalog(&repo).await;

        assert!(catalog.is_available());
        assert!(catalog.is_registered("visitors.view"));
        assert!(catalog.role_names().is_empty());
    }

    #[tokio::test]
    async fn test_load_catalog_storage_failure_degrades() {
        let mut repo = MockPermissionRepository::new();
        repo.expect_list_permission_names().returning(|| {
            Err(AppError::Internal(anyhow::anyhow!(
                "Table 'flock.permissions' doesn't exist"
            )))
        });
        repo.expect_list_role_names().never();

        let catalog = load_catalog(&repo).await;

        assert_eq!(catalog.state(), CatalogState::Unavailable);
        assert!(catalog.abilities().is_empty());
    }

    #[tokio::test]
    async fn test_try_load_catalog_propagates_role_lookup_failure() {
        let mut repo = MockPermissionRepository::new();
        repo.expect_list_permission_names()
            .returning(|| Ok(vec!["users.view".to_string()]));
        repo.expect_list_role_names()
            .returning(|| Ok(vec!["pastor".to_string()]));
        repo.expect_find_role_by_name()
            .returning(|_| Err(AppError::Internal(anyhow::anyhow!("connection reset"))));

        let result = try_load_catalog(&repo).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
