//! Read-only access to the permission tables.
//!
//! Expected layout:
//! - `permissions (id, name)`
//! - `roles (id, name)`
//! - `role_has_permissions (permission_id, role_id)`

use crate::domain::RoleGrant;
use crate::error::Result;
use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionRepository: Send + Sync {
    /// Every registered permission name
    async fn list_permission_names(&self) -> Result<Vec<String>>;
    /// Every role name
    async fn list_role_names(&self) -> Result<Vec<String>>;
    /// The role with exactly this name and the permissions it grants
    async fn find_role_by_name(&self, name: &str) -> Result<Option<RoleGrant>>;
}

#[derive(Debug, Clone, FromRow)]
struct RoleRow {
    id: u64,
    name: String,
}

pub struct PermissionRepositoryImpl {
    pool: MySqlPool,
}

impl PermissionRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionRepository for PermissionRepositoryImpl {
    async fn list_permission_names(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>("SELECT name FROM permissions ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(names)
    }

    async fn list_role_names(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>("SELECT name FROM roles ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(names)
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<RoleGrant>> {
        let rows = sqlx::query_as::<_, RoleRow>("SELECT id, name FROM roles WHERE name = ?")
            .bind(name)
            .fetch_all(&self.pool)
            .await?;

        // The column collation may be case-insensitive; role tags are not.
        let Some(role) = rows.into_iter().find(|row| row.name == name) else {
            return Ok(None);
        };

        let permissions = sqlx::query_scalar::<_, String>(
            r#"
            SELECT p.name
            FROM permissions p
            INNER JOIN role_has_permissions rp ON rp.permission_id = p.id
            WHERE rp.role_id = ?
            ORDER BY p.name
            "#,
        )
        .bind(role.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(RoleGrant {
            name: role.name,
            permissions,
        }))
    }
}
