//! Shared handle to the current catalog snapshot.

use super::{load_catalog, PermissionCatalog};
use crate::repository::PermissionRepository;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds the snapshot new evaluations start from.
///
/// Readers clone the inner `Arc` and drop the lock at once, so a reload never
/// changes a snapshot that is already in use. Changes made by an
/// administrator take effect from the next [`CatalogStore::snapshot`] call.
#[derive(Clone)]
pub struct CatalogStore {
    current: Arc<RwLock<Arc<PermissionCatalog>>>,
}

impl CatalogStore {
    pub fn new(catalog: PermissionCatalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// A store whose snapshot registers nothing
    pub fn unavailable() -> Self {
        Self::new(PermissionCatalog::unavailable())
    }

    /// Load the first snapshot from storage
    pub async fn load<R>(repo: &R) -> Self
    where
        R: PermissionRepository + ?Sized,
    {
        Self::new(load_catalog(repo).await)
    }

    /// The current snapshot
    pub async fn snapshot(&self) -> Arc<PermissionCatalog> {
        self.current.read().await.clone()
    }

    /// Install `catalog` as the current snapshot and return it
    pub async fn replace(&self, catalog: PermissionCatalog) -> Arc<PermissionCatalog> {
        let catalog = Arc::new(catalog);
        *self.current.write().await = catalog.clone();
        catalog
    }

    /// Load a fresh snapshot from storage and install it.
    ///
    /// A failed load installs the unavailable snapshot, same as at boot.
    pub async fn reload<R>(&self, repo: &R) -> Arc<PermissionCatalog>
    where
        R: PermissionRepository + ?Sized,
    {
        let catalog = load_catalog(repo).await;
        tracing::info!(available = catalog.is_available(), "Permission catalog reloaded");
        self.replace(catalog).await
    }
}
